// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The error type shared by `Store` and `Text`.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when an operation rejects its input.
///
/// Every failing operation leaves its receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dynamically typed key was not a string.
    InvalidKeyType,
    /// An increment or decrement amount was not numeric.
    InvalidAmount,
    /// The targeted value was missing or not numeric.
    NonNumericValue,
    /// Arithmetic produced infinity or NaN.
    NonFiniteResult,
    /// A string offset was negative or not representable as an index.
    InvalidOffset,
    /// A JSON document was parsed but was not an object.
    NotAnObject,
    /// Raw bytes could not be decoded in the requested encoding.
    InvalidEncoding,
    /// A JSON document could not be parsed.
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Error::InvalidKeyType => write!(f, "key must be a string"),
            Error::InvalidAmount => write!(f, "amount must be numeric"),
            Error::NonNumericValue => write!(f, "the key's value must be numeric"),
            Error::NonFiniteResult => write!(f, "numeric result is not finite"),
            Error::InvalidOffset => write!(f, "string offset must be a zero or positive integer"),
            Error::NotAnObject => write!(f, "expected a JSON object"),
            Error::InvalidEncoding => write!(f, "bytes are not valid in the given encoding"),
            Error::Json(message) => write!(f, "invalid JSON: {message}"),
        };
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        return Error::Json(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_stable() {
        assert_eq!(Error::InvalidKeyType.to_string(), "key must be a string");
        assert_eq!(Error::InvalidAmount.to_string(), "amount must be numeric");
        assert_eq!(
            Error::InvalidOffset.to_string(),
            "string offset must be a zero or positive integer",
        );
    }

    #[test]
    fn json_errors_keep_parser_message() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::from(parse);
        match &error {
            Error::Json(message) => assert!(message.contains("EOF")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(error.to_string().starts_with("invalid JSON: "));
    }
}
