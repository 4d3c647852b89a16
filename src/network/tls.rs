//! TLS is modelled as a decorator: a [`Handshake`] takes an open plain
//! stream and returns a secured one. Certificate validation and the record
//! layer live entirely in the implementation; the HTTP client only chooses
//! when to call it (for `https` URLs).
//!
//! A failed handshake hands the plain stream back next to the error, so the
//! caller can still close it.

use super::{Connection, Read};
#[cfg(feature = "async")]
use super::{AsyncConnection, AsyncRead};

/// Secures an open stream of type `C`.
pub trait Handshake<C> {
    /// The secured stream.
    type Stream: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Runs the handshake for `server_name` over `stream`. On failure the
    /// untouched `stream` comes back with the error.
    fn handshake(&mut self, server_name: &str, stream: C) -> Result<Self::Stream, (Self::Error, C)>;
}

/// Secures an open asynchronous stream of type `C`.
#[cfg(feature = "async")]
pub trait AsyncHandshake<C> {
    /// The secured stream.
    type Stream: AsyncConnection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Runs the handshake for `server_name` over `stream`. On failure the
    /// untouched `stream` comes back with the error.
    async fn handshake(
        &mut self,
        server_name: &str,
        stream: C,
    ) -> Result<Self::Stream, (Self::Error, C)>;
}

/// Placeholder for a client without TLS support.
///
/// Uninhabited: a client holding `Option<NoTls>` always has `None`, so
/// `https` requests are refused before any connection is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTls {}

impl<C: Connection> Handshake<C> for NoTls {
    type Stream = C;
    type Error = <C as Read>::Error;

    fn handshake(&mut self, _server_name: &str, _stream: C) -> Result<C, (Self::Error, C)> {
        match *self {}
    }
}

#[cfg(feature = "async")]
impl<C: AsyncConnection> AsyncHandshake<C> for NoTls {
    type Stream = C;
    type Error = <C as AsyncRead>::Error;

    async fn handshake(&mut self, _server_name: &str, _stream: C) -> Result<C, (Self::Error, C)> {
        match *self {}
    }
}
