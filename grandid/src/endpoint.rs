//! GrandID JSON API endpoints.

use strum::{AsRefStr, Display};
use url::Url;

use crate::method::RestMethod;

/// The endpoints of the GrandID JSON API, named as they appear in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum Endpoint {
    /// Starts an authentication or signing session.
    FederatedLogin,
    /// Reads the state of a session.
    GetSession,
    /// Ends a session, optionally cancelling the BankID order.
    Logout,
}

impl Endpoint {
    /// The HTTP method the service expects for this endpoint.
    pub fn method(self) -> RestMethod {
        match self {
            Self::FederatedLogin => RestMethod::Post,
            Self::GetSession | Self::Logout => RestMethod::Get,
        }
    }

    /// Appends this endpoint to the API root.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use grandid::Endpoint;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://client.grandid.com/json1.1").unwrap();
    /// assert_eq!(
    ///     Endpoint::GetSession.url(&base).unwrap().as_str(),
    ///     "https://client.grandid.com/json1.1/GetSession"
    /// );
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if `base` cannot carry a path (e.g. `mailto:`).
    pub fn url(self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(self.as_ref());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_under_versioned_root() {
        let base = Url::parse("https://client-test.grandid.com/json1.1").unwrap();
        assert_eq!(
            Endpoint::FederatedLogin.url(&base).unwrap().as_str(),
            "https://client-test.grandid.com/json1.1/FederatedLogin"
        );
    }

    #[test]
    fn test_url_with_trailing_slash() {
        let base = Url::parse("https://client.grandid.com/json1.1/").unwrap();
        assert_eq!(
            Endpoint::Logout.url(&base).unwrap().as_str(),
            "https://client.grandid.com/json1.1/Logout"
        );
    }

    #[test]
    fn test_url_at_host_root() {
        let base = Url::parse("http://127.0.0.1:4000").unwrap();
        assert_eq!(
            Endpoint::GetSession.url(&base).unwrap().as_str(),
            "http://127.0.0.1:4000/GetSession"
        );
    }

    #[test]
    fn test_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(Endpoint::GetSession.url(&base).is_err());
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::FederatedLogin.method(), RestMethod::Post);
        assert_eq!(Endpoint::GetSession.method(), RestMethod::Get);
        assert_eq!(Endpoint::Logout.method(), RestMethod::Get);
    }
}
