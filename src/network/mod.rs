//! A transport abstraction layer
//!
//! Traits for opening byte streams to a `(host, port)` endpoint and for
//! reading, writing and closing them, in synchronous and (feature `async`)
//! asynchronous flavours. The HTTP client is generic over these; a TCP
//! socket, a TLS session or a test mock can all carry its requests.
//!
//! Timeouts and cancellation belong to implementations of these traits: a
//! read that gives up reports its own error and the client passes it on.

#![allow(async_fn_in_trait)]
#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// TLS decorator hook
pub mod tls;

/// TCP connector over `std::net`
#[cfg(feature = "std")]
pub mod tcp;

pub use tls::{Handshake, NoTls};

#[cfg(feature = "async")]
pub use tls::AsyncHandshake;

/// Re-exports of common traits
pub mod prelude {
    #[cfg(feature = "async")]
    pub use super::{AsyncClose, AsyncConnect, AsyncConnection, AsyncRead, AsyncWrite};
    pub use super::{Close, Connect, Connection, Read, Write};
}

// Core synchronous traits
/// Reading half of a byte stream.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection. `Ok(0)` means the peer closed it.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Writing half of a byte stream.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection, returning how much was accepted
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Shutting a stream down.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `host` on `port`
    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error>;
}

// Core async traits
/// Reading half of an asynchronous byte stream.
#[cfg(feature = "async")]
pub trait AsyncRead {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection asynchronously. `Ok(0)` means the peer
    /// closed it.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Writing half of an asynchronous byte stream.
#[cfg(feature = "async")]
pub trait AsyncWrite {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection asynchronously
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer asynchronously
    async fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Shutting an asynchronous stream down.
#[cfg(feature = "async")]
pub trait AsyncClose {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection asynchronously
    async fn close(self) -> Result<(), Self::Error>;
}

/// An asynchronous connection
#[cfg(feature = "async")]
pub trait AsyncConnection: AsyncRead + AsyncWrite + AsyncClose {}

/// An asynchronous connector (client)
#[cfg(feature = "async")]
pub trait AsyncConnect {
    /// Associated connection type
    type Connection: AsyncConnection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `host` on `port` asynchronously
    async fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error>;
}
