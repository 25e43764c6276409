//! Layered error types for the GrandID client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`GrandIdError`] - Top-level error type for all client operations
//! - [`RemoteError`] - An error payload returned by the GrandID service
//! - [`ClientError`] - HTTP client, URL and decoding errors
//! - [`ErrorKind`] - The classified taxonomy of remote errors
//! - [`BankIdHint`] - BankID sub-statuses carried by `BANKID_MSG` errors

mod client_error;
mod grandid_error;
mod kind;
mod remote_error;

pub use client_error::ClientError;
pub use grandid_error::GrandIdError;
pub use kind::{BankIdHint, ErrorCode, ErrorKind};
pub use remote_error::RemoteError;

/// Convenience Result type for GrandID operations.
pub type Result<T> = std::result::Result<T, GrandIdError>;
