//! The closed taxonomy of failure kinds

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Every failure category the engine recognizes.
///
/// Each kind has exactly one canonical HTTP status and one default message
/// key. The message key is the kind's own name, except for
/// `StorageUpdateFailure` whose catalog key is `DbUpdate`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, EnumString, EnumIter,
)]
pub enum ErrorKind {
    // Kinds with dedicated failure shapes
    NotFound,
    Validation,
    Unauthorized,
    Forbidden,
    Conflict,
    Business,
    TooManyRequests,
    Timeout,

    // Kinds reached through generic/native failure shapes
    InvalidArgument,
    InvalidOperation,
    #[strum(serialize = "DbUpdate")]
    StorageUpdateFailure,

    // Remaining client errors
    PaymentRequired,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthenticationRequired,
    Gone,
    LengthRequired,
    PreconditionFailed,
    PayloadTooLarge,
    UriTooLong,
    UnsupportedMediaType,
    RangeNotSatisfiable,
    ExpectationFailed,
    ImATeapot,
    AuthenticationTimeout,
    MisdirectedRequest,
    UnprocessableEntity,
    Locked,
    FailedDependency,
    UpgradeRequired,
    PreconditionRequired,
    RequestHeaderFieldsTooLarge,
    UnavailableForLegalReasons,
    ClientClosedRequest,

    // Remaining server errors
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
    VariantAlsoNegotiates,
    InsufficientStorage,
    LoopDetected,
    NotExtended,
    NetworkAuthenticationRequired,

    // Catch-all
    Unhandled,
}

impl ErrorKind {
    /// Canonical HTTP status code of this kind
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::Conflict => 409,
            ErrorKind::Business => 400,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::Timeout => 408,
            ErrorKind::InvalidArgument => 400,
            ErrorKind::InvalidOperation => 400,
            ErrorKind::StorageUpdateFailure => 500,
            ErrorKind::PaymentRequired => 402,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::NotAcceptable => 406,
            ErrorKind::ProxyAuthenticationRequired => 407,
            ErrorKind::Gone => 410,
            ErrorKind::LengthRequired => 411,
            ErrorKind::PreconditionFailed => 412,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::UriTooLong => 414,
            ErrorKind::UnsupportedMediaType => 415,
            ErrorKind::RangeNotSatisfiable => 416,
            ErrorKind::ExpectationFailed => 417,
            ErrorKind::ImATeapot => 418,
            ErrorKind::AuthenticationTimeout => 419,
            ErrorKind::MisdirectedRequest => 421,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::Locked => 423,
            ErrorKind::FailedDependency => 424,
            ErrorKind::UpgradeRequired => 426,
            ErrorKind::PreconditionRequired => 428,
            ErrorKind::RequestHeaderFieldsTooLarge => 431,
            ErrorKind::UnavailableForLegalReasons => 451,
            ErrorKind::ClientClosedRequest => 499,
            ErrorKind::NotImplemented => 501,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
            ErrorKind::GatewayTimeout => 504,
            ErrorKind::HttpVersionNotSupported => 505,
            ErrorKind::VariantAlsoNegotiates => 506,
            ErrorKind::InsufficientStorage => 507,
            ErrorKind::LoopDetected => 508,
            ErrorKind::NotExtended => 510,
            ErrorKind::NetworkAuthenticationRequired => 511,
            ErrorKind::Unhandled => 500,
        }
    }

    /// Default message key looked up in the catalog
    pub fn message_key(self) -> &'static str {
        self.into()
    }

    /// Whether failures of this kind carry field-level violations
    pub const fn carries_field_violations(self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::UnprocessableEntity)
    }

    /// Canonical kind for a bare HTTP status, used for failures produced by
    /// the HTTP framework itself (unmatched routes, malformed bodies, ...).
    ///
    /// Statuses shared by several kinds resolve to the most generic one:
    /// 400 is `InvalidArgument`, 500 is `Unhandled`. Returns `None` for
    /// statuses outside the taxonomy.
    pub fn from_status(status: u16) -> Option<ErrorKind> {
        match status {
            400 => Some(ErrorKind::InvalidArgument),
            500 => Some(ErrorKind::Unhandled),
            _ => ErrorKind::iter().find(|kind| kind.status_code() == status),
        }
    }

    /// All kinds, in declaration order
    pub fn all() -> impl Iterator<Item = ErrorKind> {
        ErrorKind::iter()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_core_status_codes() {
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Validation.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::Business.status_code(), 400);
        assert_eq!(ErrorKind::TooManyRequests.status_code(), 429);
        assert_eq!(ErrorKind::Timeout.status_code(), 408);
        assert_eq!(ErrorKind::InvalidArgument.status_code(), 400);
        assert_eq!(ErrorKind::InvalidOperation.status_code(), 400);
        assert_eq!(ErrorKind::StorageUpdateFailure.status_code(), 500);
        assert_eq!(ErrorKind::Unhandled.status_code(), 500);
    }

    #[test]
    fn test_every_status_is_an_error_status() {
        for kind in ErrorKind::all() {
            let status = kind.status_code();
            assert!((400..=599).contains(&status), "{kind:?} has status {status}");
        }
    }

    #[test]
    fn test_message_keys_are_names() {
        for kind in ErrorKind::all() {
            let name = format!("{kind:?}");
            if kind == ErrorKind::StorageUpdateFailure {
                assert_eq!(kind.message_key(), "DbUpdate");
            } else {
                assert_eq!(kind.message_key(), name);
            }
        }
    }

    #[test]
    fn test_message_keys_are_unique() {
        let keys: HashSet<&str> = ErrorKind::all().map(ErrorKind::message_key).collect();
        assert_eq!(keys.len(), ErrorKind::all().count());
    }

    #[test]
    fn test_status_only_kinds_have_unique_statuses() {
        // Shared statuses are limited to 400 and 500
        let mut seen = HashSet::new();
        for kind in ErrorKind::all() {
            let status = kind.status_code();
            if status != 400 && status != 500 {
                assert!(seen.insert(status), "status {status} used twice");
            }
        }
    }

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorKind::from_status(404), Some(ErrorKind::NotFound));
        assert_eq!(ErrorKind::from_status(400), Some(ErrorKind::InvalidArgument));
        assert_eq!(ErrorKind::from_status(500), Some(ErrorKind::Unhandled));
        assert_eq!(ErrorKind::from_status(418), Some(ErrorKind::ImATeapot));
        assert_eq!(ErrorKind::from_status(499), Some(ErrorKind::ClientClosedRequest));
        assert_eq!(ErrorKind::from_status(200), None);
        assert_eq!(ErrorKind::from_status(420), None);
    }

    #[test]
    fn test_from_str_uses_message_key() {
        assert_eq!("DbUpdate".parse::<ErrorKind>().unwrap(), ErrorKind::StorageUpdateFailure);
        assert_eq!("Gone".parse::<ErrorKind>().unwrap(), ErrorKind::Gone);
        assert!("Nope".parse::<ErrorKind>().is_err());
    }

    #[test]
    fn test_field_violation_kinds() {
        assert!(ErrorKind::Validation.carries_field_violations());
        assert!(ErrorKind::UnprocessableEntity.carries_field_violations());
        assert!(!ErrorKind::Business.carries_field_violations());
    }
}
