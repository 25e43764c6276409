use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::classifier::{classify, error_object};
use crate::config::GrandIdConfig;
use crate::endpoint::Endpoint;
use crate::error::{ClientError, GrandIdError};
use crate::response::{FederatedLoginResponse, LogoutResponse, SessionResponse};
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// Request helper shared by every client variant.
///
/// Builds the three GrandID calls and decodes their payloads; the transport
/// handles credentials and error classification. A successful reply that
/// still carries an error object is classified here.
#[derive(Debug)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Creates a helper backed by [`HttpTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn from_config(config: &GrandIdConfig) -> Result<Self, GrandIdError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POSTs a login or sign body to `FederatedLogin`.
    ///
    /// ## Errors
    ///
    /// Returns the transport error, or a decode error if the reply has no
    /// `sessionId`.
    #[instrument(skip(self, body))]
    pub fn federated_login(&self, body: Value) -> Result<FederatedLoginResponse, GrandIdError> {
        let request = ApiRequest::new(Endpoint::FederatedLogin).json(body);
        let response: FederatedLoginResponse = self.call(&request)?;
        debug!(session_id = %response.session_id, "federated login started");
        Ok(response)
    }

    /// Reads a session through `GetSession`.
    ///
    /// ## Errors
    ///
    /// Returns the transport error; pending BankID orders surface here.
    #[instrument(skip(self))]
    pub fn get_session(&self, session_id: &str) -> Result<SessionResponse, GrandIdError> {
        let request = ApiRequest::new(Endpoint::GetSession).query_param("sessionId", session_id);
        self.call(&request)
    }

    /// Ends a session through `Logout`.
    ///
    /// ## Errors
    ///
    /// Returns the transport error.
    #[instrument(skip(self))]
    pub fn logout(
        &self,
        session_id: &str,
        cancel_bankid: bool,
    ) -> Result<LogoutResponse, GrandIdError> {
        let request = ApiRequest::new(Endpoint::Logout)
            .query_param("sessionId", session_id)
            .query_param("cancelBankID", cancel_bankid.to_string());
        self.call(&request)
    }

    fn call<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R, GrandIdError> {
        let value = self.transport.execute(request)?;
        if error_object(&value).is_some() {
            let error = classify(&value);
            if error.kind().is_pending() {
                debug!(hint_code = ?error.hint_code(), "BankID order still pending");
            } else {
                warn!(
                    code = error.code(),
                    kind = ?error.kind(),
                    "GrandID reported an error in a successful reply"
                );
            }
            return Err(error.into());
        }

        serde_json::from_value(value).map_err(|source| {
            ClientError::Decode {
                endpoint: request.endpoint(),
                source,
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::method::RestMethod;
    use crate::transport::testing::RecordingTransport;
    use serde_json::json;

    #[test]
    fn test_get_session_sends_session_id() {
        let api = ApiClient::new(RecordingTransport::responding(json!({
            "sessionId": "abc",
            "username": "190000000000"
        })));

        let session = api.get_session("abc").unwrap();
        assert_eq!(session.username.as_deref(), Some("190000000000"));

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint(), Endpoint::GetSession);
        assert_eq!(requests[0].method(), RestMethod::Get);
        assert_eq!(requests[0].query_value("sessionId"), Some("abc"));
    }

    #[test]
    fn test_logout_sends_cancel_flag_as_lowercase_string() {
        let api = ApiClient::new(RecordingTransport::responding(json!({})));

        api.logout("abc", false).unwrap();
        api.logout("abc", true).unwrap();

        let requests = api.transport().requests();
        assert_eq!(requests[0].endpoint(), Endpoint::Logout);
        assert_eq!(requests[0].query_value("cancelBankID"), Some("false"));
        assert_eq!(requests[1].query_value("cancelBankID"), Some("true"));
    }

    #[test]
    fn test_federated_login_without_session_id_is_a_decode_error() {
        let api = ApiClient::new(RecordingTransport::responding(json!({ "ok": true })));
        let result = api.federated_login(json!({}));
        assert!(matches!(
            result,
            Err(GrandIdError::Client(ClientError::Decode {
                endpoint: Endpoint::FederatedLogin,
                ..
            }))
        ));
    }

    #[test]
    fn test_error_object_in_successful_reply_is_classified() {
        let api = ApiClient::new(RecordingTransport::responding(json!({
            "errorObject": { "code": "INCORRECT_SSN", "message": "SSN bad" }
        })));

        let err = api.federated_login(json!({})).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IncorrectSsn));
        assert_eq!(err.to_string(), "INCORRECT_SSN: SSN bad");
    }

    #[test]
    fn test_pending_order_in_successful_reply_is_pending() {
        let api = ApiClient::new(RecordingTransport::responding(json!({
            "grandidObject": {
                "code": "BANKID_MSG",
                "message": { "hintCode": "outstandingTransaction", "status": "pending" },
                "sessionId": "abc"
            }
        })));

        let err = api.get_session("abc").unwrap_err();
        assert!(err.is_pending());
    }

    #[test]
    fn test_remote_errors_pass_through() {
        let api = ApiClient::new(RecordingTransport::failing(json!({
            "errorObject": {
                "code": "BANKID_MSG",
                "message": { "hintCode": "userSign", "status": "pending" }
            }
        })));

        let err = api.get_session("abc").unwrap_err();
        assert!(err.is_pending());
        assert!(matches!(err.kind(), Some(ErrorKind::BankIdMessage(Some(_)))));
    }
}
