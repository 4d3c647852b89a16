//! Common error types for network operations

use core::fmt;

/// A common error type for network operations.
///
/// This enum defines a set of common errors that can occur when working with
/// network connections. It is designed to be simple and portable for `no_std`
/// environments and is what the bundled TCP connector reports.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed.
    ConnectionClosed,
    /// The host name did not resolve to a usable address.
    InvalidAddress,
    /// The TLS handshake failed.
    HandshakeFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Error::NotOpen => "connection not open",
            Error::WriteError => "write failed",
            Error::ReadError => "read failed",
            Error::ConnectionRefused => "connection refused",
            Error::Timeout => "operation timed out",
            Error::ConnectionClosed => "connection closed",
            Error::InvalidAddress => "invalid address",
            Error::HandshakeFailed => "tls handshake failed",
        };
        f.write_str(message)
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::HandshakeFailed => defmt::write!(f, "HandshakeFailed"),
        }
    }
}
