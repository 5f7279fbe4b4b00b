//! Postal code identifier and normalization.
//!
//! Singapore postal codes are six digits; the first two digits form the
//! sector, which is geographically meaningful. Codes arrive from user input
//! in assorted shapes ("80145", " 080145 ") and are normalized here once so
//! the rest of the crate can assume a fixed-width digit string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized width of a postal code.
pub const CODE_WIDTH: usize = 6;

/// A validated postal code, stored as a six-character zero-padded digit
/// string.
///
/// Construction goes through [`PostalCode::parse`], which rejects anything
/// that cannot be zero-padded into six digits. Equality and hashing are by
/// normalized value, so `"80145"` and `"080145"` are the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Parses and normalizes a raw code.
    ///
    /// Leading and trailing whitespace is ignored. Inputs shorter than six
    /// digits are left-zero-padded; empty, non-digit, or longer inputs are
    /// rejected.
    pub fn parse(raw: &str) -> Result<Self, ParseCodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseCodeError::Empty);
        }
        if trimmed.len() > CODE_WIDTH {
            return Err(ParseCodeError::TooLong(trimmed.to_string()));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCodeError::NonNumeric(trimmed.to_string()));
        }
        Ok(Self(format!("{:0>width$}", trimmed, width = CODE_WIDTH)))
    }

    /// The normalized six-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit sector prefix as a number.
    pub fn sector(&self) -> u32 {
        let bytes = self.0.as_bytes();
        u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0')
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PostalCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = ParseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

/// Rejection reasons for raw postal code input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCodeError {
    Empty,
    NonNumeric(String),
    TooLong(String),
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCodeError::Empty => write!(f, "postal code is empty"),
            ParseCodeError::NonNumeric(raw) => {
                write!(f, "postal code {raw:?} contains non-digit characters")
            }
            ParseCodeError::TooLong(raw) => {
                write!(f, "postal code {raw:?} is longer than {CODE_WIDTH} digits")
            }
        }
    }
}

impl std::error::Error for ParseCodeError {}
