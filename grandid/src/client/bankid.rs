use serde::Serialize;
use tracing::instrument;

use super::sign::{sign_body, SignData};
use super::{ApiClient, GrandIdClient};
use crate::config::GrandIdConfig;
use crate::error::{ClientError, GrandIdError};
use crate::response::FederatedLoginResponse;
use crate::transport::{HttpTransport, Transport};

/// Options for BankID authentication and signing.
///
/// Unset strings are left out of the request; flags are always sent.
///
/// ## Examples
///
/// ```rust
/// use grandid::BankIdOptions;
///
/// let options = BankIdOptions {
///     personal_number: Some("190000000000".to_string()),
///     mobile_bank_id: true,
///     ..Default::default()
/// };
/// assert!(options.gui);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankIdOptions {
    /// Where GrandID sends the user after a GUI flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Swedish personal number (12 digits) to bind the order to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_number: Option<String>,
    /// Use Mobile BankID.
    pub mobile_bank_id: bool,
    /// Use BankID on a computer.
    pub desktop_bank_id: bool,
    /// Start BankID on the device the request came from.
    pub this_device: bool,
    /// Let the user pick the device in the GUI.
    pub device_choice: bool,
    /// Ask the user for their personal number in the GUI.
    #[serde(rename = "askForSSN")]
    pub ask_for_ssn: bool,
    /// Use the GrandID hosted GUI. Defaults to `true`.
    pub gui: bool,
    /// Show an animated QR code for Mobile BankID.
    pub qr: bool,
    /// Customer URL shown in the GUI.
    #[serde(rename = "customerURL", skip_serializing_if = "Option::is_none")]
    pub customer_url: Option<String>,
    /// URL the BankID app returns to when started on this device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_redirect: Option<String>,
    /// Allow biometric confirmation when signing.
    pub allow_fingerprint_sign: bool,
}

impl Default for BankIdOptions {
    fn default() -> Self {
        Self {
            callback_url: None,
            personal_number: None,
            mobile_bank_id: false,
            desktop_bank_id: false,
            this_device: false,
            device_choice: false,
            ask_for_ssn: false,
            gui: true,
            qr: false,
            customer_url: None,
            app_redirect: None,
            allow_fingerprint_sign: false,
        }
    }
}

/// GrandID client for Swedish BankID.
#[derive(Debug)]
pub struct BankIdClient<T = HttpTransport> {
    api: ApiClient<T>,
}

impl BankIdClient<HttpTransport> {
    /// Creates a BankID client talking HTTP to the configured server.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn new(config: &GrandIdConfig) -> Result<Self, GrandIdError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> BankIdClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            api: ApiClient::new(transport),
        }
    }
}

impl<T: Transport> GrandIdClient for BankIdClient<T> {
    type Backend = T;
    type Options = BankIdOptions;

    fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[instrument(name = "bankid_authenticate", skip_all)]
    fn authenticate(
        &self,
        options: &BankIdOptions,
    ) -> Result<FederatedLoginResponse, GrandIdError> {
        let body = serde_json::to_value(options).map_err(ClientError::Encode)?;
        self.api.federated_login(body)
    }

    #[instrument(name = "bankid_sign", skip_all)]
    fn sign(
        &self,
        data: &SignData,
        options: &BankIdOptions,
    ) -> Result<FederatedLoginResponse, GrandIdError> {
        self.api.federated_login(sign_body(data, options)?)
    }
}
