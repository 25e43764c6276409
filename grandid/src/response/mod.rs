//! Successful response payloads.
//!
//! The service adds fields over time, so each response keeps whatever it
//! does not name in an `extra` map instead of rejecting it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `FederatedLogin`, for both authentication and signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedLoginResponse {
    /// Identifies the session in later `collect`/`logout` calls.
    pub session_id: String,
    /// Where to send the user when the GrandID GUI is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Token for launching the BankID app on the same device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_start_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GetSession` once the user has completed the flow.
///
/// Pending orders never reach this type: they arrive as a `BANKID_MSG`
/// error whose kind [`is_pending`](crate::ErrorKind::is_pending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Attributes released by the identity provider (name, personal number,
    /// signature, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionResponse {
    /// Returns `true` when the payload identifies a finished session.
    pub fn is_complete(&self) -> bool {
        self.session_id.is_some()
    }

    /// Looks up a user attribute rendered as text.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.user_attributes.as_ref()?.get(name)?.as_str()
    }
}

/// Response of `Logout`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
