//! Blocking client for the GrandID federated login gateway.
//!
//! GrandID fronts BankID and Net iD behind a small JSON API. This crate
//! builds the requests for that API, injects the `apiKey` and
//! `authenticateServiceKey` credentials, and turns the service's error
//! payloads into a typed [`ErrorKind`] taxonomy.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use grandid::{BankIdClient, BankIdOptions, GrandIdClient, GrandIdConfig};
//!
//! # fn main() -> Result<(), grandid::GrandIdError> {
//! let config = GrandIdConfig::new("api-key", "service-key").with_test_server(true);
//! let client = BankIdClient::new(&config)?;
//!
//! let login = client.authenticate(&BankIdOptions {
//!     personal_number: Some("190000000000".to_string()),
//!     gui: false,
//!     ..Default::default()
//! })?;
//!
//! match client.collect(&login.session_id) {
//!     Ok(session) => println!("signed in as {:?}", session.username),
//!     Err(e) if e.is_pending() => println!("still waiting for the user"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod response;
pub mod transport;

pub use crate::classifier::{classify, classify_response};
pub use crate::client::{
    encode_user_data, ApiClient, BankIdClient, BankIdOptions, GrandIdClient, NetIdAccessClient,
    NetIdAccessOptions, NetIdEnterpriseClient, SignData,
};
pub use crate::config::{Credentials, GrandIdConfig};
pub use crate::endpoint::Endpoint;
pub use crate::error::{
    BankIdHint, ClientError, ErrorCode, ErrorKind, GrandIdError, RemoteError, Result,
};
pub use crate::method::RestMethod;
pub use crate::response::{FederatedLoginResponse, LogoutResponse, SessionResponse};
pub use crate::transport::{ApiRequest, HttpTransport, Transport};
