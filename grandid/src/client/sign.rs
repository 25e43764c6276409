use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, GrandIdError};

/// The data a user is asked to sign.
///
/// Both parts are sent base64-encoded; encoding happens when the request is
/// built, so callers pass plain text here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignData {
    /// Text shown to the user in the BankID or Net iD app.
    pub user_visible_data: String,
    /// Data bound to the signature but not shown.
    pub user_non_visible_data: Option<String>,
}

impl SignData {
    pub fn new(user_visible_data: impl Into<String>) -> Self {
        Self {
            user_visible_data: user_visible_data.into(),
            user_non_visible_data: None,
        }
    }

    #[must_use]
    pub fn with_non_visible_data(mut self, data: impl Into<String>) -> Self {
        self.user_non_visible_data = Some(data.into());
        self
    }
}

/// Base64-encodes user data (standard alphabet, padded).
///
/// ## Examples
///
/// ```rust
/// use grandid::encode_user_data;
///
/// assert_eq!(encode_user_data("Godkänn köp"), "R29ka8Okbm4ga8O2cA==");
/// ```
pub fn encode_user_data(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignBody<'a, O: Serialize> {
    user_visible_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_non_visible_data: Option<String>,
    #[serde(flatten)]
    options: &'a O,
}

/// Builds a `FederatedLogin` sign body: the encoded data plus the
/// provider options.
pub(crate) fn sign_body<O: Serialize>(data: &SignData, options: &O) -> Result<Value, GrandIdError> {
    let body = SignBody {
        user_visible_data: encode_user_data(&data.user_visible_data),
        user_non_visible_data: data
            .user_non_visible_data
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(encode_user_data),
        options,
    };
    Ok(serde_json::to_value(body).map_err(ClientError::Encode)?)
}
