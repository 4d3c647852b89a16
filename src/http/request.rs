use alloc::string::String;
use alloc::vec::Vec;

use super::Method;
use crate::url::Url;

/// An outgoing HTTP/1.1 request.
///
/// Borrows the [`Url`] and the body; owns its header list. Headers are
/// written in insertion order and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    /// The request method.
    pub method: Method,
    /// Target of the request; supplies the request target and `Host`.
    pub url: &'a Url,
    /// Header `(name, value)` pairs, written after `Host`.
    pub headers: Vec<(String, String)>,
    /// Bytes written after the blank line.
    pub body: &'a [u8],
}

impl<'a> Request<'a> {
    /// A request with no headers and an empty body.
    pub fn new(method: Method, url: &'a Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: &[],
        }
    }

    /// Appends a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the body. No `Content-Length` is added; supply one with
    /// [`header`](Self::header) if the server needs it.
    pub fn body(mut self, body: &'a [u8]) -> Self {
        self.body = body;
        self
    }

    /// Serializes the request into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to(&mut buf);
        buf
    }

    /// Appends the serialized request to `buf`.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        write_request(buf, self.method, self.url, &self.headers, self.body);
    }
}

/// Serializes a request.
///
/// ```text
/// <METHOD> <path><query><fragment> HTTP/1.1\r\n
/// Host: <host>\r\n
/// <name>: <value>\r\n      (for each header, in order)
/// \r\n
/// <body>
/// ```
///
/// Only the request line and `Host` are generated; every other header comes
/// from `headers` verbatim. The output depends on nothing but the arguments.
pub fn build_request<K, V>(method: Method, url: &Url, headers: &[(K, V)], body: &[u8]) -> Vec<u8>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut buf = Vec::new();
    write_request(&mut buf, method, url, headers, body);
    buf
}

fn write_request<K, V>(buf: &mut Vec<u8>, method: Method, url: &Url, headers: &[(K, V)], body: &[u8])
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let header_len: usize = headers
        .iter()
        .map(|(k, v)| k.as_ref().len() + v.as_ref().len() + 4)
        .sum();
    buf.reserve(64 + url.host().len() + url.raw().len() + header_len + body.len());

    // Request line
    buf.extend_from_slice(method.as_str().as_bytes());
    buf.push(b' ');
    buf.extend_from_slice(url.path().as_bytes());
    buf.extend_from_slice(url.query().as_bytes());
    buf.extend_from_slice(url.fragment().as_bytes());
    buf.extend_from_slice(b" HTTP/1.1\r\n");

    buf.extend_from_slice(b"Host: ");
    buf.extend_from_slice(url.host().as_bytes());
    buf.extend_from_slice(b"\r\n");

    for (name, value) in headers {
        buf.extend_from_slice(name.as_ref().as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_ref().as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(body);
}
