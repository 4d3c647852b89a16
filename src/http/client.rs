//! The client drives one request/response exchange per call:
//!
//! 1. parse the URL (nothing is sent if this fails)
//! 2. serialize the request
//! 3. open a connection, with a TLS handshake for `https`
//! 4. write the whole request
//! 5. read until the response is complete or the peer closes the connection
//! 6. close the connection and parse what was read
//!
//! There is no connection reuse, no retry and no redirect handling; the first
//! error ends the exchange.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use super::request::{Request, build_request};
use super::response::{Response, header_end, is_complete, parse_response};
use super::{Method, Options, ResponseError};
use crate::network::{Close, Connect, Handshake, NoTls, Read, Write};
use crate::url::{Url, UrlError};

const NO_HEADERS: [(&str, &str); 0] = [];

/// A transport failure, tagged with the step of the exchange that failed.
///
/// `E` is the transport's own error and is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError<E> {
    /// Opening the connection failed.
    Connect(E),
    /// The TLS handshake failed.
    Handshake(E),
    /// Writing the request failed.
    Write(E),
    /// Reading the response failed.
    Read(E),
    /// The peer closed the connection before sending anything, or stopped
    /// accepting request bytes.
    Closed,
}

/// Errors returned by [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The URL was rejected; no connection was opened.
    Url(UrlError),
    /// The received bytes are not a valid response.
    Response(ResponseError),
    /// The transport failed.
    Transport(TransportError<E>),
    /// The URL is `https` but the client has no TLS handshake configured.
    TlsUnavailable,
    /// The response grew past [`Options::max_response_size`].
    ResponseTooLarge,
}

impl<E> From<UrlError> for Error<E> {
    fn from(e: UrlError) -> Self {
        Error::Url(e)
    }
}

impl<E> From<ResponseError> for Error<E> {
    fn from(e: ResponseError) -> Self {
        Error::Response(e)
    }
}

impl<E> From<TransportError<E>> for Error<E> {
    fn from(e: TransportError<E>) -> Self {
        Error::Transport(e)
    }
}

impl<E: fmt::Debug> fmt::Display for TransportError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect(e) => write!(f, "connect failed: {e:?}"),
            TransportError::Handshake(e) => write!(f, "tls handshake failed: {e:?}"),
            TransportError::Write(e) => write!(f, "write failed: {e:?}"),
            TransportError::Read(e) => write!(f, "read failed: {e:?}"),
            TransportError::Closed => f.write_str("connection closed by peer"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Url(e) => write!(f, "invalid url: {e}"),
            Error::Response(e) => write!(f, "invalid response: {e}"),
            Error::Transport(e) => write!(f, "transport error: {e}"),
            Error::TlsUnavailable => f.write_str("https requested but no tls handshake configured"),
            Error::ResponseTooLarge => f.write_str("response exceeds the configured maximum size"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Url(e) => Some(e),
            Error::Response(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for TransportError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            TransportError::Connect(e) => defmt::write!(f, "Connect({})", e),
            TransportError::Handshake(e) => defmt::write!(f, "Handshake({})", e),
            TransportError::Write(e) => defmt::write!(f, "Write({})", e),
            TransportError::Read(e) => defmt::write!(f, "Read({})", e),
            TransportError::Closed => defmt::write!(f, "Closed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Url(e) => defmt::write!(f, "Url({})", e),
            Error::Response(e) => defmt::write!(f, "Response({})", e),
            Error::Transport(e) => defmt::write!(f, "Transport({})", e),
            Error::TlsUnavailable => defmt::write!(f, "TlsUnavailable"),
            Error::ResponseTooLarge => defmt::write!(f, "ResponseTooLarge"),
        }
    }
}

/// A blocking HTTP/1.1 client over any [`Connect`] implementation.
///
/// `T` is the TLS handshake used for `https` URLs. A client built with
/// [`Client::new`] has none and refuses `https` with
/// [`Error::TlsUnavailable`]; add one with [`Client::with_tls`].
#[derive(Debug)]
pub struct Client<N, T = NoTls> {
    connector: N,
    tls: Option<T>,
    options: Options,
}

impl<N> Client<N, NoTls> {
    /// A client with default [`Options`] and no TLS.
    pub fn new(connector: N) -> Self {
        Self::with_options(connector, Options::default())
    }

    /// A client with the given options and no TLS.
    pub fn with_options(connector: N, options: Options) -> Self {
        Self {
            connector,
            tls: None,
            options,
        }
    }
}

impl<N, T> Client<N, T> {
    /// Uses `tls` to secure connections to `https` URLs.
    pub fn with_tls<U>(self, tls: U) -> Client<N, U> {
        Client {
            connector: self.connector,
            tls: Some(tls),
            options: self.options,
        }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The connector used to open connections.
    pub fn connector(&self) -> &N {
        &self.connector
    }

    /// Mutable access to the connector.
    pub fn connector_mut(&mut self) -> &mut N {
        &mut self.connector
    }
}

impl<N, T, E> Client<N, T>
where
    N: Connect<Error = E>,
    N::Connection: Read<Error = E> + Write<Error = E> + Close<Error = E>,
    T: Handshake<N::Connection, Error = E>,
    T::Stream: Read<Error = E> + Write<Error = E> + Close<Error = E>,
    E: fmt::Debug,
{
    /// Sends a `GET` with no headers and no body.
    pub fn get(&mut self, url: &str) -> Result<Response, Error<E>> {
        self.send(Method::Get, url, &NO_HEADERS, &[])
    }

    /// Parses `url`, sends the request and returns the parsed response.
    ///
    /// Only the request line and `Host` are generated; pass any other header
    /// (`Content-Length`, `Connection`, ...) in `headers`.
    pub fn send<K, V>(
        &mut self,
        method: Method,
        url: &str,
        headers: &[(K, V)],
        body: &[u8],
    ) -> Result<Response, Error<E>>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = Url::parse(url)?;
        let request = build_request(method, &url, headers, body);
        self.exchange(method, &url, &request)
    }

    /// Sends an already assembled [`Request`].
    pub fn send_request(&mut self, request: &Request<'_>) -> Result<Response, Error<E>> {
        self.exchange(request.method, request.url, &request.to_bytes())
    }

    fn exchange(&mut self, method: Method, url: &Url, request: &[u8]) -> Result<Response, Error<E>> {
        if url.is_secure() && self.tls.is_none() {
            warn!("refusing https request to {}: no tls configured", url.host());
            return Err(Error::TlsUnavailable);
        }

        debug!("connecting to {}:{}", url.host(), url.port());
        let stream = self
            .connector
            .connect(url.host(), url.port())
            .map_err(TransportError::Connect)?;

        match self.tls.as_mut() {
            Some(tls) if url.is_secure() => match tls.handshake(url.host(), stream) {
                Ok(stream) => round_trip(stream, method, request, &self.options),
                Err((e, stream)) => {
                    warn!("tls handshake with {} failed", url.host());
                    close(stream);
                    Err(TransportError::Handshake(e).into())
                }
            },
            _ => round_trip(stream, method, request, &self.options),
        }
    }
}

fn round_trip<C, E>(
    mut conn: C,
    method: Method,
    request: &[u8],
    options: &Options,
) -> Result<Response, Error<E>>
where
    C: Read<Error = E> + Write<Error = E> + Close<Error = E>,
{
    let received = write_all(&mut conn, request)
        .map_err(Error::from)
        .and_then(|()| receive(&mut conn, method, options));

    close(conn);

    let received = received?;
    let response = parse_response(&received)?;
    debug!("{} response: status {}, {} body bytes", method.as_str(), response.status, response.body.len());
    Ok(response)
}

fn close<C: Close>(conn: C) {
    if conn.close().is_err() {
        warn!("closing connection failed");
    }
}

fn write_all<C: Write>(conn: &mut C, mut buf: &[u8]) -> Result<(), TransportError<C::Error>> {
    trace!("writing {} request bytes", buf.len());
    while !buf.is_empty() {
        match conn.write(buf).map_err(TransportError::Write)? {
            0 => return Err(TransportError::Closed),
            n => buf = &buf[n..],
        }
    }
    conn.flush().map_err(TransportError::Write)
}

fn receive<C: Read>(conn: &mut C, method: Method, options: &Options) -> Result<Vec<u8>, Error<C::Error>> {
    let mut received = Vec::new();
    let mut chunk = vec![0u8; options.chunk_size()];

    loop {
        let n = conn.read(&mut chunk).map_err(TransportError::Read)?;
        if n == 0 {
            trace!("peer closed the connection after {} bytes", received.len());
            break;
        }

        received.extend_from_slice(&chunk[..n]);
        if received.len() > options.max_response_size {
            warn!("response exceeds {} bytes", options.max_response_size);
            return Err(Error::ResponseTooLarge);
        }
        if is_finished(method, &received) {
            break;
        }
    }

    if received.is_empty() {
        return Err(TransportError::Closed.into());
    }
    Ok(received)
}

/// Whether reading can stop. A `HEAD` response never has a body, so its head
/// alone completes it.
pub(crate) fn is_finished(method: Method, received: &[u8]) -> bool {
    match method {
        Method::Head => header_end(received).is_some(),
        _ => is_complete(received),
    }
}
