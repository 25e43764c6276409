//! Classification of GrandID error payloads.
//!
//! A failed request carries an error object under `errorObject` or, on some
//! server versions, the legacy `grandidObject`. The object holds a `code`
//! (older payloads: `errorCode`) and a `message`. For `BANKID_MSG` the
//! message is usually a `{status, hintCode}` object instead of a string.
//!
//! Classification is total: anything unrecognised becomes
//! [`ErrorKind::Generic`] rather than an error of its own.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{BankIdHint, ErrorCode, ErrorKind, RemoteError};

const ERROR_OBJECT_KEYS: [&str; 2] = ["errorObject", "grandidObject"];
const CODE_KEYS: [&str; 2] = ["code", "errorCode"];
const MESSAGE_KEYS: [&str; 2] = ["message", "details"];

/// Code reported when an error object has no code at all.
pub const UNKNOWN_CODE: &str = "UNKNOWN";

/// Classifies the parsed JSON body of a failed response.
///
/// ## Examples
///
/// ```rust
/// use grandid::{classify, ErrorKind};
/// use serde_json::json;
///
/// let err = classify(&json!({
///     "errorObject": { "code": "INCORRECT_SSN", "message": "SSN bad" }
/// }));
/// assert_eq!(err.kind(), ErrorKind::IncorrectSsn);
/// assert_eq!(err.to_string(), "INCORRECT_SSN: SSN bad");
/// ```
pub fn classify(body: &Value) -> RemoteError {
    match error_object(body) {
        Some(object) => classify_error_object(object),
        None => RemoteError::new(
            ErrorKind::Generic,
            UNKNOWN_CODE,
            format!("{UNKNOWN_CODE}: {body}"),
        ),
    }
}

/// Classifies a raw HTTP error response.
///
/// Bodies that are not JSON, or JSON without an error object, become
/// [`ErrorKind::Generic`] with the HTTP status as the code.
pub fn classify_response(status: u16, body: &str) -> RemoteError {
    let parsed = serde_json::from_str::<Value>(body).ok();
    if let Some(object) = parsed.as_ref().and_then(error_object) {
        return classify_error_object(object);
    }

    debug!(status, "error response carried no GrandID error object");
    let body = body.trim();
    let message = if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {body}")
    };
    RemoteError::new(ErrorKind::Generic, status.to_string(), message)
}

pub(crate) fn error_object(body: &Value) -> Option<&Map<String, Value>> {
    ERROR_OBJECT_KEYS
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_object))
}

fn classify_error_object(object: &Map<String, Value>) -> RemoteError {
    let code = CODE_KEYS
        .iter()
        .find_map(|key| object.get(*key))
        .map(value_text)
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| UNKNOWN_CODE.to_string());
    let message = MESSAGE_KEYS.iter().find_map(|key| object.get(*key));

    match code.parse::<ErrorCode>() {
        Ok(ErrorCode::BankIdMessage) => classify_bankid_message(&code, message),
        Ok(known) => {
            let text = format!("{code}: {}", message.map(value_text).unwrap_or_default());
            RemoteError::new(known.kind(), code, text)
        }
        Err(_) => {
            debug!(code = %code, "unrecognised GrandID error code");
            let text = format!("{code}: {}", message.map(value_text).unwrap_or_default());
            RemoteError::new(ErrorKind::Generic, code, text)
        }
    }
}

fn classify_bankid_message(code: &str, message: Option<&Value>) -> RemoteError {
    let Some(Value::Object(fields)) = message else {
        // Some server paths send a plain string here ("Session id does not exist").
        let text = message
            .map(value_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| code.to_string());
        return RemoteError::new(ErrorKind::BankIdMessage(None), code, text);
    };

    let status = fields.get("status").and_then(Value::as_str);
    let hint_code = fields.get("hintCode").and_then(Value::as_str);
    let hint = hint_code.and_then(|h| h.parse::<BankIdHint>().ok());
    if hint.is_none() {
        debug!(hint_code = ?hint_code, "BankID message without a known hint code");
    }

    let text = match (hint_code, status) {
        (Some(h), Some(s)) => format!("{code}: {h} ({s})"),
        (Some(h), None) => format!("{code}: {h}"),
        (None, Some(s)) => format!("{code}: {s}"),
        (None, None) => format!("{code}: {}", Value::Object(fields.clone())),
    };

    RemoteError::new(ErrorKind::BankIdMessage(hint), code, text)
        .with_bankid_status(status.map(str::to_owned), hint_code.map(str::to_owned))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_known_code_maps_to_its_kind() {
        for code in ErrorCode::iter() {
            let body = json!({ "errorObject": { "code": code.to_string(), "message": "boom" } });
            assert_eq!(classify(&body).kind(), code.kind(), "code {code}");
        }
    }

    #[test]
    fn test_incorrect_ssn_message_is_prefixed_with_code() {
        let err = classify(&json!({
            "errorObject": { "code": "INCORRECT_SSN", "message": "SSN bad" }
        }));
        assert_eq!(err.kind(), ErrorKind::IncorrectSsn);
        assert_eq!(err.code(), "INCORRECT_SSN");
        assert_eq!(err.to_string(), "INCORRECT_SSN: SSN bad");
    }

    #[test]
    fn test_unknown_code_falls_back_to_generic() {
        let err = classify(&json!({
            "errorObject": { "code": "SHINY_NEW_ERROR", "message": "something" }
        }));
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.to_string(), "SHINY_NEW_ERROR: something");
    }

    #[test]
    fn test_outstanding_transaction_is_pending() {
        let err = classify(&json!({
            "errorObject": {
                "code": "BANKID_MSG",
                "message": { "hintCode": "outstandingTransaction", "status": "pending" }
            }
        }));
        assert_eq!(
            err.kind(),
            ErrorKind::BankIdMessage(Some(BankIdHint::OutstandingTransaction))
        );
        assert!(err.kind().is_pending());
        assert_eq!(err.status(), Some("pending"));
        assert_eq!(err.hint_code(), Some("outstandingTransaction"));
        assert_eq!(err.to_string(), "BANKID_MSG: outstandingTransaction (pending)");
    }

    #[test]
    fn test_legacy_grandid_object_is_accepted() {
        let err = classify(&json!({
            "grandidObject": {
                "autoStartToken": "[Filtered]",
                "code": "BANKID_MSG",
                "message": { "hintCode": "outstandingTransaction", "status": "pending" },
                "sessionId": "abc"
            }
        }));
        assert_eq!(
            err.kind(),
            ErrorKind::BankIdMessage(Some(BankIdHint::OutstandingTransaction))
        );
    }

    #[test]
    fn test_legacy_error_code_field_is_accepted() {
        let err = classify(&json!({
            "errorObject": { "errorCode": "MISSING_SIGNDATA", "message": "no data" }
        }));
        assert_eq!(err.kind(), ErrorKind::MissingSignData);
        assert_eq!(err.to_string(), "MISSING_SIGNDATA: no data");
    }

    #[test]
    fn test_bankid_message_as_plain_string_is_preserved() {
        let err = classify(&json!({
            "errorObject": { "code": "BANKID_MSG", "message": "Session id does not exist" }
        }));
        assert_eq!(err.kind(), ErrorKind::BankIdMessage(None));
        assert_eq!(err.to_string(), "Session id does not exist");
        assert_eq!(err.hint_code(), None);
    }

    #[test]
    fn test_bankid_message_without_message_uses_code() {
        let err = classify(&json!({ "errorObject": { "code": "BANKID_MSG" } }));
        assert_eq!(err.kind(), ErrorKind::BankIdMessage(None));
        assert_eq!(err.to_string(), "BANKID_MSG");
    }

    #[test]
    fn test_terminal_hint_is_not_pending() {
        let err = classify(&json!({
            "errorObject": {
                "code": "BANKID_MSG",
                "message": { "hintCode": "userCancel", "status": "failed" }
            }
        }));
        assert_eq!(err.kind(), ErrorKind::BankIdMessage(Some(BankIdHint::UserCancel)));
        assert!(!err.kind().is_pending());
    }

    #[test]
    fn test_unknown_hint_keeps_raw_hint_code() {
        let err = classify(&json!({
            "errorObject": {
                "code": "BANKID_MSG",
                "message": { "hintCode": "somethingElse", "status": "failed" }
            }
        }));
        assert_eq!(err.kind(), ErrorKind::BankIdMessage(None));
        assert_eq!(err.hint_code(), Some("somethingElse"));
    }

    #[test]
    fn test_missing_error_object_is_generic() {
        let err = classify(&json!({ "unexpected": true }));
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.code(), UNKNOWN_CODE);
    }

    #[test]
    fn test_missing_code_is_generic() {
        let err = classify(&json!({ "errorObject": { "message": "no code here" } }));
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.to_string(), "UNKNOWN: no code here");
    }

    #[test]
    fn test_classify_response_with_json_body() {
        let err = classify_response(
            400,
            r#"{"errorObject":{"code":"INCORRECT_URLDATA","message":"bad callback"}}"#,
        );
        assert_eq!(err.kind(), ErrorKind::IncorrectUrlData);
        assert_eq!(err.to_string(), "INCORRECT_URLDATA: bad callback");
    }

    #[test]
    fn test_classify_response_with_html_body() {
        let err = classify_response(502, "<html>Bad Gateway</html>\n");
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.code(), "502");
        assert_eq!(err.to_string(), "HTTP 502: <html>Bad Gateway</html>");
    }

    #[test]
    fn test_classify_response_with_empty_body() {
        let err = classify_response(503, "");
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
