//! Request transport.
//!
//! [`Transport`] is the seam between the client façades and the network.
//! [`HttpTransport`] is the real implementation; anything else implementing
//! the trait can stand in for it.

mod executor;

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::GrandIdError;
use crate::method::RestMethod;

pub use executor::HttpTransport;

/// A request to one GrandID endpoint, before credentials are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    endpoint: Endpoint,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without parameters or body.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body. Ignored for endpoints reached with GET.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn method(&self) -> RestMethod {
        self.endpoint.method()
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Looks up a query parameter by name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The JSON body, if the method carries one.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref().filter(|_| self.method().has_body())
    }
}

/// Sends [`ApiRequest`]s to GrandID.
///
/// Implementations return the parsed JSON of a 200 response and a
/// classified [`GrandIdError::Remote`] for every other status.
pub trait Transport {
    /// Executes a single request.
    ///
    /// ## Errors
    ///
    /// Returns [`GrandIdError::Remote`] for error responses and
    /// [`GrandIdError::Client`] when no usable response was received.
    fn execute(&self, request: &ApiRequest) -> Result<Value, GrandIdError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &ApiRequest) -> Result<Value, GrandIdError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &ApiRequest) -> Result<Value, GrandIdError> {
        (**self).execute(request)
    }
}
