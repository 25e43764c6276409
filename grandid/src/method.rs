//! HTTP methods used by the GrandID API.

use strum::Display;

/// HTTP methods for GrandID endpoints.
///
/// ## Examples
///
/// ```rust
/// use grandid::RestMethod;
///
/// assert!(RestMethod::Post.has_body());
/// assert!(!RestMethod::Get.has_body());
/// assert_eq!(RestMethod::Post.to_string(), "POST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Session lookups and logout.
    Get,
    /// HTTP POST - Starting a federated login.
    Post,
}

impl RestMethod {
    /// Returns `true` if requests with this method carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(RestMethod::Get.to_reqwest(), reqwest::Method::GET);
        assert_eq!(RestMethod::Post.to_reqwest(), reqwest::Method::POST);
    }
}
