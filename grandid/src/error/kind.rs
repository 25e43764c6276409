//! The taxonomy of errors reported by the GrandID service.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Error codes with a dedicated [`ErrorKind`].
///
/// Codes outside this set still classify, as [`ErrorKind::Generic`].
///
/// ## Examples
///
/// ```rust
/// use grandid::{ErrorCode, ErrorKind};
///
/// let code: ErrorCode = "INCORRECT_SSN".parse().unwrap();
/// assert_eq!(code.kind(), ErrorKind::IncorrectSsn);
/// assert!("SOMETHING_NEW".parse::<ErrorCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum ErrorCode {
    #[strum(serialize = "INCORRECT_URLDATA")]
    IncorrectUrlData,
    #[strum(serialize = "INCORRECT_SSN")]
    IncorrectSsn,
    #[strum(serialize = "SIGNDATA_TOO_LARGE")]
    SignDataTooLarge,
    #[strum(serialize = "MISSING_SIGNDATA")]
    MissingSignData,
    #[strum(serialize = "INVALID_CERTIFICATE_POLICIES")]
    InvalidCertificatePolicies,
    #[strum(serialize = "BANKID_ERROR")]
    BankIdError,
    #[strum(serialize = "BANKID_MSG")]
    BankIdMessage,
}

impl ErrorCode {
    /// The kind this code classifies to.
    ///
    /// `BANKID_MSG` maps to a BankID message without a hint; the classifier
    /// refines it when the payload carries a `hintCode`.
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::IncorrectUrlData => ErrorKind::IncorrectUrlData,
            Self::IncorrectSsn => ErrorKind::IncorrectSsn,
            Self::SignDataTooLarge => ErrorKind::SignDataTooLarge,
            Self::MissingSignData => ErrorKind::MissingSignData,
            Self::InvalidCertificatePolicies => ErrorKind::InvalidCertificatePolicies,
            Self::BankIdError => ErrorKind::BankIdInternal,
            Self::BankIdMessage => ErrorKind::BankIdMessage(None),
        }
    }
}

/// BankID hint codes carried inside a `BANKID_MSG` error.
///
/// The first four are pending states: the order is still alive and the
/// session should be collected again. The rest are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum BankIdHint {
    OutstandingTransaction,
    NoClient,
    Started,
    UserSign,
    ExpiredTransaction,
    CertificateErr,
    UserCancel,
    Cancelled,
    StartFailed,
}

impl BankIdHint {
    /// Returns `true` while the BankID order is still waiting on the user.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            Self::OutstandingTransaction | Self::NoClient | Self::Started | Self::UserSign
        )
    }
}

/// Classification of a [`RemoteError`](super::RemoteError).
///
/// Every error response maps to exactly one kind. [`ErrorKind::Generic`] is
/// the root of the taxonomy and absorbs codes this crate does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognised or missing error code.
    Generic,
    /// The request URL data was rejected.
    IncorrectUrlData,
    /// The personal number failed validation.
    IncorrectSsn,
    /// The data to sign exceeds the service limit.
    SignDataTooLarge,
    /// A sign request arrived without data to sign.
    MissingSignData,
    /// The requested certificate policies are invalid.
    InvalidCertificatePolicies,
    /// BankID reported an internal error.
    BankIdInternal,
    /// A BankID status message; `None` when the hint is absent or unknown.
    BankIdMessage(Option<BankIdHint>),
}

impl ErrorKind {
    /// Returns `true` for BankID messages whose hint is a pending state.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::BankIdMessage(Some(hint)) if hint.is_pending())
    }

    /// Returns `true` for any `BANKID_MSG` error, pending or terminal.
    pub fn is_bankid_message(self) -> bool {
        matches!(self, Self::BankIdMessage(_))
    }

    /// The BankID hint, when this is a BankID message that carried one.
    pub fn hint(self) -> Option<BankIdHint> {
        match self {
            Self::BankIdMessage(hint) => hint,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_codes_parse_their_wire_names() {
        for code in ErrorCode::iter() {
            let wire: &'static str = code.into();
            assert_eq!(wire.parse::<ErrorCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_hint_codes_use_camel_case() {
        assert_eq!(
            "outstandingTransaction".parse::<BankIdHint>().unwrap(),
            BankIdHint::OutstandingTransaction
        );
        assert_eq!(BankIdHint::CertificateErr.to_string(), "certificateErr");
        assert!("OutstandingTransaction".parse::<BankIdHint>().is_err());
    }

    #[test]
    fn test_pending_hints() {
        let pending: Vec<BankIdHint> = BankIdHint::iter().filter(|h| h.is_pending()).collect();
        assert_eq!(
            pending,
            vec![
                BankIdHint::OutstandingTransaction,
                BankIdHint::NoClient,
                BankIdHint::Started,
                BankIdHint::UserSign,
            ]
        );
    }

    #[test]
    fn test_kind_helpers() {
        let pending = ErrorKind::BankIdMessage(Some(BankIdHint::UserSign));
        assert!(pending.is_pending());
        assert!(pending.is_bankid_message());
        assert_eq!(pending.hint(), Some(BankIdHint::UserSign));

        let terminal = ErrorKind::BankIdMessage(Some(BankIdHint::UserCancel));
        assert!(!terminal.is_pending());
        assert!(terminal.is_bankid_message());

        assert!(!ErrorKind::BankIdMessage(None).is_pending());
        assert!(!ErrorKind::IncorrectSsn.is_bankid_message());
        assert_eq!(ErrorKind::Generic.hint(), None);
    }
}
