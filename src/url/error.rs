//! Error type for URL parsing

use core::fmt;

/// Reasons a string is rejected as a [`Url`](super::Url).
///
/// The parser runs its checks in a fixed order and stops at the first
/// failure, so exactly one of these is reported per input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UrlError {
    /// The input contains a byte below `0x20` or the `DEL` byte (`0x7F`).
    FoundControlCharacter,
    /// No well-formed scheme terminated by `:` starts the input.
    SchemeNotFound,
    /// A scheme was found but it is neither `http` nor `https`.
    InvalidScheme,
    /// The authority is not a dotted host name followed by `/`, `?` or `#`.
    HostNotFound,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::FoundControlCharacter => f.write_str("url contains a control character"),
            UrlError::SchemeNotFound => f.write_str("url scheme not found"),
            UrlError::InvalidScheme => f.write_str("url scheme is not http or https"),
            UrlError::HostNotFound => f.write_str("url host not found"),
        }
    }
}

impl core::error::Error for UrlError {}

#[cfg(feature = "defmt")]
impl defmt::Format for UrlError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            UrlError::FoundControlCharacter => defmt::write!(f, "FoundControlCharacter"),
            UrlError::SchemeNotFound => defmt::write!(f, "SchemeNotFound"),
            UrlError::InvalidScheme => defmt::write!(f, "InvalidScheme"),
            UrlError::HostNotFound => defmt::write!(f, "HostNotFound"),
        }
    }
}
