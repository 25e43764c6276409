use thiserror::Error;

use super::client_error::ClientError;
use super::kind::ErrorKind;
use super::remote_error::RemoteError;

/// Top-level error returned by every GrandID operation.
#[derive(Debug, Error)]
pub enum GrandIdError {
    /// The service answered with a non-200 status.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The request never produced a usable response.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The client variant cannot perform this operation at all.
    #[error("{provider} does not support {operation}")]
    Unsupported {
        provider: &'static str,
        operation: &'static str,
    },
}

impl GrandIdError {
    /// The classified kind for remote errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Remote(e) => Some(e.kind()),
            Self::Client(_) | Self::Unsupported { .. } => None,
        }
    }

    /// Returns `true` when a collected BankID order is still in progress.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use grandid::{BankIdHint, ErrorKind, GrandIdError, RemoteError};
    ///
    /// let err: GrandIdError = RemoteError::new(
    ///     ErrorKind::BankIdMessage(Some(BankIdHint::OutstandingTransaction)),
    ///     "BANKID_MSG",
    ///     "BANKID_MSG: outstandingTransaction (pending)",
    /// )
    /// .into();
    /// assert!(err.is_pending());
    /// ```
    pub fn is_pending(&self) -> bool {
        self.kind().is_some_and(ErrorKind::is_pending)
    }

    /// The remote error, if the service produced one.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}
