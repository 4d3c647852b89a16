//! Error type for response parsing

use core::fmt;

/// Reasons a received buffer is rejected as a [`Response`](super::Response).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResponseError {
    /// The first line does not contain `HTTP`.
    StatusLineNotFound,
    /// The status line has fewer than three space-separated parts.
    InvalidStatusLine,
    /// The status code is not a three-digit number.
    InvalidStatus,
    /// A header line has no `:` or an empty name.
    InvalidHeader,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::StatusLineNotFound => f.write_str("status line not found"),
            ResponseError::InvalidStatusLine => f.write_str("invalid status line"),
            ResponseError::InvalidStatus => f.write_str("invalid status code"),
            ResponseError::InvalidHeader => f.write_str("invalid header line"),
        }
    }
}

impl core::error::Error for ResponseError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ResponseError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ResponseError::StatusLineNotFound => defmt::write!(f, "StatusLineNotFound"),
            ResponseError::InvalidStatusLine => defmt::write!(f, "InvalidStatusLine"),
            ResponseError::InvalidStatus => defmt::write!(f, "InvalidStatus"),
            ResponseError::InvalidHeader => defmt::write!(f, "InvalidHeader"),
        }
    }
}
