use serde_json::json;
use tracing::{instrument, warn};

use super::sign::SignData;
use super::{ApiClient, GrandIdClient};
use crate::config::GrandIdConfig;
use crate::error::GrandIdError;
use crate::response::FederatedLoginResponse;
use crate::transport::{HttpTransport, Transport};

const PROVIDER: &str = "Net iD Enterprise";

/// GrandID client for Net iD Enterprise.
///
/// Authentication takes no options. Signing is not offered by the service,
/// so [`sign`](GrandIdClient::sign) always fails without a network call.
#[derive(Debug)]
pub struct NetIdEnterpriseClient<T = HttpTransport> {
    api: ApiClient<T>,
}

impl NetIdEnterpriseClient<HttpTransport> {
    /// Creates a Net iD Enterprise client talking HTTP to the configured
    /// server.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn new(config: &GrandIdConfig) -> Result<Self, GrandIdError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> NetIdEnterpriseClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            api: ApiClient::new(transport),
        }
    }
}

impl<T: Transport> GrandIdClient for NetIdEnterpriseClient<T> {
    type Backend = T;
    type Options = ();

    fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[instrument(name = "netid_enterprise_authenticate", skip_all)]
    fn authenticate(&self, _options: &()) -> Result<FederatedLoginResponse, GrandIdError> {
        self.api.federated_login(json!({}))
    }

    fn sign(
        &self,
        _data: &SignData,
        _options: &(),
    ) -> Result<FederatedLoginResponse, GrandIdError> {
        warn!(provider = PROVIDER, "sign called on a provider without signing");
        Err(GrandIdError::Unsupported {
            provider: PROVIDER,
            operation: "signing",
        })
    }
}
