//! HTTP/1.1 protocol implementation.
//!
//! The codec half is sans-IO: [`request::build_request`] turns a method, a
//! [`Url`](crate::url::Url), headers and a body into wire bytes, and
//! [`response::parse_response`] turns a buffer of received bytes back into a
//! [`Response`]. Neither touches the network.
//!
//! The [`Client`] wires the codec to any transport implementing
//! [`Connect`](crate::network::Connect): URL parse → request bytes → write →
//! read until the message is complete → parse.
//!
//! # Wire format
//!
//! ```text
//! GET /path?query#fragment HTTP/1.1\r\n
//! Host: example.com\r\n
//! Accept: */*\r\n
//! \r\n
//! <body>
//! ```
//!
//! Headers are ordered `(name, value)` pairs in both directions. Duplicates
//! are kept and nothing is added, removed or case-folded beyond the `Host`
//! line. Chunked transfer-encoding, redirects, compression and connection
//! reuse are not handled.
//!
//! ```rust,no_run
//! use libhttp::http::{Client, Method};
//! # use libhttp::network::{Close, Connect, Connection, Read, Write};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = ();
//! #     fn connect(&mut self, _host: &str, _port: u16) -> Result<MockConnection, ()> { Ok(MockConnection) }
//! # }
//!
//! let mut client = Client::new(MockNetwork);
//! let response = client.send(
//!     Method::Post,
//!     "http://example.com/api/status",
//!     &[("Content-Type", "application/json"), ("Content-Length", "2")],
//!     b"{}",
//! );
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Helpers for building header values.
pub mod auth;

/// Client orchestrator and its error type.
pub mod client;

/// Error type for response parsing.
pub mod error;

/// Client configuration.
pub mod options;

/// Request serialization.
pub mod request;

/// Response parsing.
pub mod response;

/// Async client orchestrator.
#[cfg(feature = "async")]
pub mod async_client;

#[cfg(feature = "async")]
pub use async_client::AsyncClient;
pub use client::{Client, Error, TransportError};
pub use error::ResponseError;
pub use options::Options;
pub use request::Request;
pub use response::Response;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
}

impl Method {
    /// The method token as sent on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the supported method tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMethod;

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown http method")
    }
}

impl core::error::Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Method tokens are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            _ => Err(UnknownMethod),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}
