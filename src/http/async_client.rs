//! Async counterpart of [`Client`](super::Client) over the
//! [`AsyncConnect`](crate::network::AsyncConnect) family of traits. Same
//! exchange, same errors; every transport call is awaited.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use super::client::{Error, TransportError, is_finished};
use super::request::{Request, build_request};
use super::response::{Response, parse_response};
use super::{Method, Options};
use crate::network::{AsyncClose, AsyncConnect, AsyncHandshake, AsyncRead, AsyncWrite, NoTls};
use crate::url::Url;

const NO_HEADERS: [(&str, &str); 0] = [];

/// A non-blocking HTTP/1.1 client over any
/// [`AsyncConnect`](crate::network::AsyncConnect) implementation.
#[derive(Debug)]
pub struct AsyncClient<N, T = NoTls> {
    connector: N,
    tls: Option<T>,
    options: Options,
}

impl<N> AsyncClient<N, NoTls> {
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

impl<N, T> AsyncClient<N, T> {
    /// Uses `tls` to secure connections to `https` URLs.
    pub fn with_tls<U>(self, tls: U) -> AsyncClient<N, U> {
        AsyncClient {
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

impl<N, T, E> AsyncClient<N, T>
where
    N: AsyncConnect<Error = E>,
    N::Connection: AsyncRead<Error = E> + AsyncWrite<Error = E> + AsyncClose<Error = E>,
    T: AsyncHandshake<N::Connection, Error = E>,
    T::Stream: AsyncRead<Error = E> + AsyncWrite<Error = E> + AsyncClose<Error = E>,
    E: fmt::Debug,
{
    /// Sends a `GET` with no headers and no body.
    pub async fn get(&mut self, url: &str) -> Result<Response, Error<E>> {
        self.send(Method::Get, url, &NO_HEADERS, &[]).await
    }

    /// Parses `url`, sends the request and returns the parsed response.
    pub async fn send<K, V>(
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
        self.exchange(method, &url, &request).await
    }

    /// Sends an already assembled [`Request`].
    pub async fn send_request(&mut self, request: &Request<'_>) -> Result<Response, Error<E>> {
        self.exchange(request.method, request.url, &request.to_bytes())
            .await
    }

    async fn exchange(
        &mut self,
        method: Method,
        url: &Url,
        request: &[u8],
    ) -> Result<Response, Error<E>> {
        if url.is_secure() && self.tls.is_none() {
            warn!("refusing https request to {}: no tls configured", url.host());
            return Err(Error::TlsUnavailable);
        }

        debug!("connecting to {}:{}", url.host(), url.port());
        let stream = self
            .connector
            .connect(url.host(), url.port())
            .await
            .map_err(TransportError::Connect)?;

        match self.tls.as_mut() {
            Some(tls) if url.is_secure() => match tls.handshake(url.host(), stream).await {
                Ok(stream) => round_trip(stream, method, request, &self.options).await,
                Err((e, stream)) => {
                    warn!("tls handshake with {} failed", url.host());
                    close(stream).await;
                    Err(TransportError::Handshake(e).into())
                }
            },
            _ => round_trip(stream, method, request, &self.options).await,
        }
    }
}

async fn round_trip<C, E>(
    mut conn: C,
    method: Method,
    request: &[u8],
    options: &Options,
) -> Result<Response, Error<E>>
where
    C: AsyncRead<Error = E> + AsyncWrite<Error = E> + AsyncClose<Error = E>,
{
    let received = match write_all(&mut conn, request).await {
        Ok(()) => receive(&mut conn, method, options).await,
        Err(e) => Err(e.into()),
    };

    close(conn).await;

    let received = received?;
    let response = parse_response(&received)?;
    debug!("{} response: status {}, {} body bytes", method.as_str(), response.status, response.body.len());
    Ok(response)
}

async fn close<C: AsyncClose>(conn: C) {
    if conn.close().await.is_err() {
        warn!("closing connection failed");
    }
}

async fn write_all<C: AsyncWrite>(
    conn: &mut C,
    mut buf: &[u8],
) -> Result<(), TransportError<C::Error>> {
    trace!("writing {} request bytes", buf.len());
    while !buf.is_empty() {
        match conn.write(buf).await.map_err(TransportError::Write)? {
            0 => return Err(TransportError::Closed),
            n => buf = &buf[n..],
        }
    }
    conn.flush().await.map_err(TransportError::Write)
}

async fn receive<C: AsyncRead>(
    conn: &mut C,
    method: Method,
    options: &Options,
) -> Result<Vec<u8>, Error<C::Error>> {
    let mut received = Vec::new();
    let mut chunk = vec![0u8; options.chunk_size()];

    loop {
        let n = conn.read(&mut chunk).await.map_err(TransportError::Read)?;
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
