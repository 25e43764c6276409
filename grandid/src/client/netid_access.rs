use serde::Serialize;
use tracing::instrument;

use super::sign::{sign_body, SignData};
use super::{ApiClient, GrandIdClient};
use crate::config::GrandIdConfig;
use crate::error::{ClientError, GrandIdError};
use crate::response::FederatedLoginResponse;
use crate::transport::{HttpTransport, Transport};

/// Options for Net iD Access authentication and signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetIdAccessOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_number: Option<String>,
    /// Start Net iD Access on the device the request came from.
    pub this_device: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_redirect: Option<String>,
    /// Use the GrandID hosted GUI. Defaults to `true`.
    pub gui: bool,
}

impl Default for NetIdAccessOptions {
    fn default() -> Self {
        Self {
            callback_url: None,
            personal_number: None,
            this_device: false,
            app_redirect: None,
            gui: true,
        }
    }
}

/// GrandID client for Net iD Access.
#[derive(Debug)]
pub struct NetIdAccessClient<T = HttpTransport> {
    api: ApiClient<T>,
}

impl NetIdAccessClient<HttpTransport> {
    /// Creates a Net iD Access client talking HTTP to the configured server.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn new(config: &GrandIdConfig) -> Result<Self, GrandIdError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> NetIdAccessClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            api: ApiClient::new(transport),
        }
    }
}

impl<T: Transport> GrandIdClient for NetIdAccessClient<T> {
    type Backend = T;
    type Options = NetIdAccessOptions;

    fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[instrument(name = "netid_access_authenticate", skip_all)]
    fn authenticate(
        &self,
        options: &NetIdAccessOptions,
    ) -> Result<FederatedLoginResponse, GrandIdError> {
        let body = serde_json::to_value(options).map_err(ClientError::Encode)?;
        self.api.federated_login(body)
    }

    #[instrument(name = "netid_access_sign", skip_all)]
    fn sign(
        &self,
        data: &SignData,
        options: &NetIdAccessOptions,
    ) -> Result<FederatedLoginResponse, GrandIdError> {
        self.api.federated_login(sign_body(data, options)?)
    }
}
