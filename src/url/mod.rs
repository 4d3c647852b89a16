//! # URL grammar parser
//!
//! Turns a raw string into a validated, decomposed [`Url`] or a specific
//! [`UrlError`]. The accepted grammar is deliberately narrow:
//!
//! ```text
//! url       = scheme ":" [ "//" ] host remainder
//! scheme    = "http" / "https"
//! host      = label *( "." label )      ; at least one period
//! remainder = ( "/" / "?" / "#" ) *char  ; percent-encoded, then split
//! ```
//!
//! Checks run strictly in this order and stop at the first failure:
//!
//! 1. control characters anywhere in the input
//! 2. scheme extraction
//! 3. scheme whitelist (`http` → port 80, `https` → port 443)
//! 4. host extraction
//! 5. percent-encoding of the remainder (see [`percent_encode`])
//! 6. path / query / fragment split of the encoded remainder
//!
//! Explicit ports, user info and IP literals are not part of the grammar.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

mod encode;
mod error;


pub use encode::percent_encode;
pub use error::UrlError;

/// A validated and decomposed `http`/`https` URL.
///
/// Built once by [`Url::parse`] and immutable afterwards. `path`, `query`
/// and `fragment` partition the percent-encoded text after the host: their
/// concatenation is exactly that text, `query` is empty or starts with `?`
/// and `fragment` is empty or starts with `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    scheme: String,
    host: String,
    path: String,
    query: String,
    fragment: String,
    raw: String,
    port: u16,
}

impl Url {
    /// Parses and validates `raw`.
    ///
    /// ```rust
    /// use libhttp::url::{Url, UrlError};
    ///
    /// let url = Url::parse("https://foo.com/bar?foo=bar&bar=foo#foo").unwrap();
    /// assert_eq!(url.scheme(), "https");
    /// assert_eq!(url.host(), "foo.com");
    /// assert_eq!(url.path(), "/bar");
    /// assert_eq!(url.query(), "?foo=bar&bar=foo");
    /// assert_eq!(url.fragment(), "#foo");
    /// assert_eq!(url.port(), 443);
    ///
    /// assert_eq!(Url::parse("ws://foo.com/bar"), Err(UrlError::InvalidScheme));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        if raw.bytes().any(|b| b < 0x20 || b == 0x7F) {
            return Err(UrlError::FoundControlCharacter);
        }

        let (scheme, rest) = split_scheme(raw)?;
        let port = match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(UrlError::InvalidScheme),
        };

        let rest = rest.strip_prefix("//").unwrap_or(rest);
        let (host, remainder) = split_host(rest)?;

        let encoded = percent_encode(remainder);
        let fragment_start = encoded.find('#').unwrap_or(encoded.len());
        let query_start = encoded[..fragment_start]
            .find('?')
            .unwrap_or(fragment_start);

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            path: encoded[..query_start].to_string(),
            query: encoded[query_start..fragment_start].to_string(),
            fragment: encoded[fragment_start..].to_string(),
            raw: raw.to_string(),
            port,
        })
    }

    /// The scheme exactly as written: `http` or `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host name, without any trailing terminator.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The default port of the scheme.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The percent-encoded path, possibly empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The percent-encoded query including its leading `?`, or empty.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The percent-encoded fragment including its leading `#`, or empty.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The input string the URL was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the scheme is `https`.
    pub fn is_secure(&self) -> bool {
        self.scheme == "https"
    }

    /// The text sent as the request target: path, query and fragment.
    pub fn request_target(&self) -> String {
        let mut target =
            String::with_capacity(self.path.len() + self.query.len() + self.fragment.len());
        target.push_str(&self.path);
        target.push_str(&self.query);
        target.push_str(&self.fragment);
        target
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parses `raw` into a [`Url`]. Same as [`Url::parse`].
pub fn parse_url(raw: &str) -> Result<Url, UrlError> {
    Url::parse(raw)
}

/// Splits off the scheme and the `:` that ends it.
///
/// Returns the scheme as written and the text after the colon.
fn split_scheme(raw: &str) -> Result<(&str, &str), UrlError> {
    for (i, c) in raw.char_indices() {
        match c {
            c if c.is_ascii_alphabetic() => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i > 0 => return Ok((&raw[..i], &raw[i + 1..])),
            _ => return Err(UrlError::SchemeNotFound),
        }
    }

    Err(UrlError::SchemeNotFound)
}

/// Splits a host name off the front of `rest`.
///
/// The host must contain a period, must not start or end with `-` or `.`,
/// must not contain an empty label, and must be followed by `/`, `?` or `#`.
/// The returned remainder starts with that terminator.
fn split_host(rest: &str) -> Result<(&str, &str), UrlError> {
    let mut period_seen = false;
    let mut prev: Option<char> = None;

    for (i, c) in rest.char_indices() {
        match c {
            c if c.is_ascii_alphanumeric() => {}
            '-' if i > 0 => {}
            '.' if i > 0 && prev != Some('.') => period_seen = true,
            '/' | '?' | '#' => {
                if !period_seen || matches!(prev, Some('-' | '.')) {
                    return Err(UrlError::HostNotFound);
                }
                return Ok(rest.split_at(i));
            }
            _ => return Err(UrlError::HostNotFound),
        }
        prev = Some(c);
    }

    // A host must be followed by one of its terminators.
    Err(UrlError::HostNotFound)
}
