//! Client configuration.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ClientError;

/// Production API root.
pub const PRODUCTION_URL: &str = "https://client.grandid.com/json1.1";

/// Test server API root.
pub const TEST_URL: &str = "https://client-test.grandid.com/json1.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The key pair identifying a GrandID customer service.
///
/// Both keys travel as query parameters on every request. `Debug` output is
/// redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    authenticate_service_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, authenticate_service_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            authenticate_service_key: authenticate_service_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn authenticate_service_key(&self) -> &str {
        &self.authenticate_service_key
    }

    /// The query pairs appended to every request.
    pub(crate) fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("apiKey", self.api_key.as_str()),
            ("authenticateServiceKey", self.authenticate_service_key.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("authenticate_service_key", &"<redacted>")
            .finish()
    }
}

/// Configuration for a GrandID client.
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use grandid::GrandIdConfig;
///
/// let config = GrandIdConfig::new("api-key", "service-key")
///     .with_test_server(true)
///     .with_request_timeout(Duration::from_secs(10));
///
/// assert_eq!(
///     config.base_url().unwrap().as_str(),
///     "https://client-test.grandid.com/json1.1"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GrandIdConfig {
    credentials: Credentials,
    test_server: bool,
    request_timeout: Duration,
    base_url: Option<String>,
}

impl GrandIdConfig {
    /// Creates a production configuration with the default timeout.
    pub fn new(api_key: impl Into<String>, authenticate_service_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, authenticate_service_key),
            test_server: false,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: None,
        }
    }

    /// Selects the GrandID test server instead of production.
    #[must_use]
    pub fn with_test_server(mut self, test_server: bool) -> Self {
        self.test_server = test_server;
        self
    }

    /// Sets the timeout applied to each request.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Overrides the API root (useful for testing). Takes precedence over
    /// [`with_test_server`](Self::with_test_server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_test_server(&self) -> bool {
        self.test_server
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Resolves the API root: explicit override, then test server, then
    /// production.
    ///
    /// ## Errors
    ///
    /// Returns an error if the override is not a valid URL.
    pub fn base_url(&self) -> Result<Url, ClientError> {
        let raw = match &self.base_url {
            Some(url) => url.as_str(),
            None if self.test_server => TEST_URL,
            None => PRODUCTION_URL,
        };
        Ok(Url::parse(raw)?)
    }
}
