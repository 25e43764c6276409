//! Client façades for the identity providers behind GrandID.
//!
//! Each provider gets its own client type implementing [`GrandIdClient`].
//! They differ only in the options they accept; the shared request plumbing
//! lives in [`ApiClient`].

mod api;
mod bankid;
mod netid_access;
mod netid_enterprise;
mod sign;

pub use api::ApiClient;
pub use bankid::{BankIdClient, BankIdOptions};
pub use netid_access::{NetIdAccessClient, NetIdAccessOptions};
pub use netid_enterprise::NetIdEnterpriseClient;
pub use sign::{encode_user_data, SignData};

use crate::error::GrandIdError;
use crate::response::{FederatedLoginResponse, LogoutResponse, SessionResponse};
use crate::transport::Transport;

/// Operations common to every GrandID provider.
pub trait GrandIdClient {
    /// The transport requests go through.
    type Backend: Transport;

    /// Provider-specific options for `authenticate` and `sign`.
    type Options;

    /// The shared request helper.
    fn api(&self) -> &ApiClient<Self::Backend>;

    /// Starts an authentication session.
    ///
    /// ## Errors
    ///
    /// Returns the classified remote error when the service rejects the
    /// request, or a client error when it cannot be reached.
    fn authenticate(&self, options: &Self::Options)
        -> Result<FederatedLoginResponse, GrandIdError>;

    /// Starts a signing session for `data`.
    ///
    /// ## Errors
    ///
    /// As [`authenticate`](Self::authenticate); providers without signing
    /// return [`GrandIdError::Unsupported`] without touching the network.
    fn sign(
        &self,
        data: &SignData,
        options: &Self::Options,
    ) -> Result<FederatedLoginResponse, GrandIdError>;

    /// Reads the state of a session.
    ///
    /// While a BankID order is in progress this returns an error for which
    /// [`GrandIdError::is_pending`] holds; callers poll until it does not.
    ///
    /// ## Errors
    ///
    /// Returns the classified remote error, pending or terminal.
    fn collect(&self, session_id: &str) -> Result<SessionResponse, GrandIdError> {
        self.api().get_session(session_id)
    }

    /// Ends a session. With `cancel_bankid` an outstanding BankID order is
    /// cancelled as well; pass `false` for a plain logout.
    ///
    /// ## Errors
    ///
    /// Returns the classified remote error when the service rejects it.
    fn logout(
        &self,
        session_id: &str,
        cancel_bankid: bool,
    ) -> Result<LogoutResponse, GrandIdError> {
        self.api().logout(session_id, cancel_bankid)
    }
}
