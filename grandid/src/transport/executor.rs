//! Request execution with tracing instrumentation.
//!
//! This module provides [`HttpTransport`], the blocking reqwest-backed
//! [`Transport`] that talks to the GrandID service.

use std::fmt::Display;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument, warn, Span};
use url::Url;

use super::{ApiRequest, Transport};
use crate::classifier::classify_response;
use crate::config::{Credentials, GrandIdConfig};
use crate::error::{ClientError, GrandIdError, RemoteError};

/// Blocking HTTP transport for the GrandID JSON API.
///
/// Holds one connection pool, reused across sequential calls. Every request
/// gets the `apiKey` and `authenticateServiceKey` query parameters, a JSON
/// content type and the configured timeout.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpTransport {
    /// Creates a transport from a client configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn new(config: &GrandIdConfig) -> Result<Self, GrandIdError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
            credentials: config.credentials().clone(),
        })
    }

    /// Returns the API root requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    #[instrument(
        name = "grandid_request",
        skip(self, request),
        fields(
            http.method = %request.method(),
            http.path = %request.endpoint(),
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    fn execute(&self, request: &ApiRequest) -> Result<Value, GrandIdError> {
        let url = request
            .endpoint()
            .url(&self.base_url)
            .map_err(ClientError::InvalidUrl)?;

        let mut builder = self
            .client
            .request(request.method().to_reqwest(), url)
            .query(&self.credentials.query_pairs())
            .query(request.query());
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            warn!(error = %e, "GrandID request failed");
            ClientError::Request(e)
        })?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if status != StatusCode::OK {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let error = error_from_body(status, response.text());
            if error.kind().is_pending() {
                debug!(hint_code = ?error.hint_code(), "BankID order still pending");
            } else {
                warn!(code = error.code(), kind = ?error.kind(), "GrandID returned an error");
            }
            return Err(error.into());
        }

        Span::current().record("otel.status_code", "OK");

        let text = response.text().map_err(ClientError::Request)?;
        let parsed = serde_json::from_str(&text).map_err(|source| ClientError::Decode {
            endpoint: request.endpoint(),
            source,
        })?;
        debug!("GrandID request succeeded");

        Ok(parsed)
    }
}

/// Classifies a non-200 reply. A body that cannot be read is treated as
/// empty so the status still maps to a remote error.
fn error_from_body<E: Display>(status: StatusCode, body: Result<String, E>) -> RemoteError {
    let text = body.unwrap_or_else(|e| {
        debug!(error = %e, "failed to read GrandID error body");
        String::new()
    });
    classify_response(status.as_u16(), &text)
}
