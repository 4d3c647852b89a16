//! A [`Connect`] implementation over `std::net::TcpStream`.
//!
//! The timeouts from [`Options`] are applied here, at the transport
//! boundary: a blocked connect, read or write gives up with
//! [`Error::Timeout`] and the client reports it as a transport failure.

use std::io::{self, Read as _, Write as _};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};
use crate::http::Options;

/// Opens TCP connections, resolving host names with the system resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TcpConnector {
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
}

impl TcpConnector {
    /// A connector without timeouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// A connector using the timeouts configured in `options`.
    pub fn from_options(options: &Options) -> Self {
        Self {
            connect_timeout: millis(options.connect_timeout_ms),
            read_timeout: millis(options.read_timeout_ms),
            write_timeout: millis(options.write_timeout_ms),
        }
    }

    fn open(&self, host: &str, port: u16) -> Result<TcpStream, Error> {
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(|_| Error::InvalidAddress)?;

        let mut last_error = Error::InvalidAddress;
        for addr in addrs {
            let result = match self.connect_timeout {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match result {
                Ok(stream) => return Ok(stream),
                Err(e) => last_error = map_io_error(&e, Error::ConnectionRefused),
            }
        }

        Err(last_error)
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        let stream = self.open(host, port)?;
        stream
            .set_read_timeout(self.read_timeout)
            .map_err(|_| Error::NotOpen)?;
        stream
            .set_write_timeout(self.write_timeout)
            .map_err(|_| Error::NotOpen)?;
        Ok(TcpConnection { stream })
    }
}

/// An open TCP connection.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// The underlying socket, e.g. for a TLS implementation to wrap.
    pub fn get_ref(&self) -> &TcpStream {
        &self.stream
    }

    /// Unwraps the underlying socket.
    pub fn into_inner(self) -> TcpStream {
        self.stream
    }
}

impl From<TcpStream> for TcpConnection {
    fn from(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream
            .read(buf)
            .map_err(|e| map_io_error(&e, Error::ReadError))
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream
            .write(buf)
            .map_err(|e| map_io_error(&e, Error::WriteError))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream
            .flush()
            .map_err(|e| map_io_error(&e, Error::WriteError))
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The peer got there first.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            Err(_) => Err(Error::NotOpen),
        }
    }
}

impl Connection for TcpConnection {}

fn millis(ms: Option<u64>) -> Option<Duration> {
    ms.filter(|ms| *ms > 0).map(Duration::from_millis)
}

fn map_io_error(e: &io::Error, fallback: Error) -> Error {
    match e.kind() {
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Error::Timeout,
        io::ErrorKind::ConnectionRefused => Error::ConnectionRefused,
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe => Error::ConnectionClosed,
        _ => fallback,
    }
}
