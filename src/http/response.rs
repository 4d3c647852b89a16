use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::error::ResponseError;

/// Separates the header block from the body.
const DELIMITER: &[u8] = b"\r\n\r\n";

/// A parsed HTTP/1.1 response.
///
/// The head is decoded as UTF-8 with invalid sequences replaced by U+FFFD,
/// so `version`, `reason` and header text may differ from the raw bytes when
/// the peer sends non-UTF-8 data. `body` is always the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Protocol version token of the status line, e.g. `HTTP/1.1`.
    pub version: String,
    /// Three-digit status code.
    pub status: u16,
    /// Reason phrase: everything after the status code, possibly empty.
    pub reason: String,
    /// Header `(name, value)` pairs in the order received.
    pub headers: Vec<(String, String)>,
    /// Message body; empty unless the header block was terminated.
    pub body: Vec<u8>,
}

impl Response {
    /// Parses a response from `buf`. Same as [`parse_response`].
    pub fn parse(buf: &[u8]) -> Result<Self, ResponseError> {
        parse_response(buf)
    }

    /// Value of the first header whose name matches `name`, ignoring ASCII
    /// case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_all(name).next()
    }

    /// Values of every header whose name matches `name`, ignoring ASCII
    /// case, in the order received.
    pub fn header_all<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The declared body length, if a `Content-Length` header holds a
    /// nonzero integer.
    pub fn content_length(&self) -> Option<usize> {
        content_length(&self.headers)
    }

    /// The body as UTF-8 text, if it is valid UTF-8.
    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }

    /// Whether the status is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parses a complete or partial response buffer.
///
/// The first line must contain `HTTP` and split on spaces into a version, a
/// status code and a reason phrase. Header lines follow until a blank line;
/// each is split at its first `:` and the value is trimmed of surrounding
/// whitespace. Bytes of the head that are not valid UTF-8 are replaced by
/// U+FFFD rather than rejected.
///
/// The body is what follows the blank line. With a nonzero `Content-Length`
/// it is at most that many bytes and anything after them is ignored. Without
/// one, every remaining byte of `buf` belongs to the body, so the caller has
/// to have read until the peer closed the connection. Chunked
/// transfer-encoding is not decoded.
///
/// ```rust
/// use libhttp::http::response::parse_response;
///
/// let response = parse_response(
///     b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello, trailing bytes",
/// )
/// .unwrap();
/// assert_eq!(response.status, 200);
/// assert_eq!(response.reason, "OK");
/// assert_eq!(response.body, b"hello");
/// ```
pub fn parse_response(buf: &[u8]) -> Result<Response, ResponseError> {
    let (head, body) = match find(buf, DELIMITER) {
        Some(i) => (&buf[..i], Some(&buf[i + DELIMITER.len()..])),
        None => (buf, None),
    };

    let head = String::from_utf8_lossy(head);
    let mut lines = head.split("\r\n");

    let status_line = lines.next().unwrap_or_default();
    if !status_line.contains("HTTP") {
        return Err(ResponseError::StatusLineNotFound);
    }

    let mut parts = status_line.splitn(3, ' ');
    let (Some(version), Some(code), Some(reason)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ResponseError::InvalidStatusLine);
    };
    let status = parse_status(code)?;

    let mut headers = Vec::new();
    for line in lines.take_while(|line| !line.is_empty()) {
        headers.push(parse_header(line)?);
    }

    let body = match body {
        Some(rest) => match content_length(&headers) {
            Some(len) => rest[..len.min(rest.len())].to_vec(),
            None => rest.to_vec(),
        },
        None => Vec::new(),
    };

    Ok(Response {
        version: version.to_owned(),
        status,
        reason: reason.to_owned(),
        headers,
        body,
    })
}

/// Offset of the first body byte, once the header block is terminated.
pub fn header_end(buf: &[u8]) -> Option<usize> {
    find(buf, DELIMITER).map(|i| i + DELIMITER.len())
}

/// Whether `buf` holds a whole message, so reading can stop before the peer
/// closes the connection.
///
/// True once the header block is terminated and one of these holds:
///
/// - the head does not parse (more bytes will not fix it)
/// - the status is `1xx`, `204` or `304`, which never carry a body
/// - a nonzero `Content-Length` body is fully buffered
///
/// A message without a declared length is only complete at end of stream,
/// which this function cannot observe.
pub fn is_complete(buf: &[u8]) -> bool {
    let Some(body_start) = header_end(buf) else {
        return false;
    };

    match parse_response(&buf[..body_start]) {
        Err(_) => true,
        Ok(head) if is_bodiless(head.status) => true,
        Ok(head) => match head.content_length() {
            Some(len) => buf.len() - body_start >= len,
            None => false,
        },
    }
}

fn is_bodiless(status: u16) -> bool {
    (100..200).contains(&status) || status == 204 || status == 304
}

fn parse_status(code: &str) -> Result<u16, ResponseError> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ResponseError::InvalidStatus);
    }

    match code.parse::<u16>() {
        Ok(status) if status >= 100 => Ok(status),
        _ => Err(ResponseError::InvalidStatus),
    }
}

fn parse_header(line: &str) -> Result<(String, String), ResponseError> {
    let (name, value) = line.split_once(':').ok_or(ResponseError::InvalidHeader)?;
    if name.is_empty() {
        return Err(ResponseError::InvalidHeader);
    }

    let value = value.trim_matches(|c| c == ' ' || c == '\t');
    Ok((name.to_string(), value.to_string()))
}

fn content_length(headers: &[(String, String)]) -> Option<usize> {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("Content-Length"))
        .filter(|(_, value)| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .filter(|len| *len > 0)
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
