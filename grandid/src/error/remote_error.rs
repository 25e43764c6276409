use thiserror::Error;

use super::kind::ErrorKind;

/// An error payload returned by the GrandID service, already classified.
///
/// The `Display` output is the human-readable message: `"<code>: <message>"`
/// for coded errors, or the BankID message text as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    kind: ErrorKind,
    code: String,
    message: String,
    status: Option<String>,
    hint_code: Option<String>,
}

impl RemoteError {
    /// Creates a classified remote error.
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            status: None,
            hint_code: None,
        }
    }

    /// Attaches the raw BankID `status` and `hintCode` fields.
    #[must_use]
    pub fn with_bankid_status(mut self, status: Option<String>, hint_code: Option<String>) -> Self {
        self.status = status;
        self.hint_code = hint_code;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The error code as sent by the server.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The BankID order status (e.g. `pending`, `failed`), if present.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The raw BankID hint code, kept even when it is not a known
    /// [`BankIdHint`](super::BankIdHint).
    pub fn hint_code(&self) -> Option<&str> {
        self.hint_code.as_deref()
    }
}
