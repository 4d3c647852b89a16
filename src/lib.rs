//! # libhttp - Minimal HTTP/1.1 client
//!
//! A small HTTP/1.1 client for embedded and hosted Rust. Given a URL string it
//! validates and decomposes it, serializes a request, sends it over any
//! transport implementing the [`network`] traits, and parses the raw response
//! bytes back into a structured [`Response`].
//!
//! ## Layers
//!
//! - **[`url`]**: a strict URL grammar parser and a fixed-set percent-encoder
//! - **[`http`]**: the request/response codec and the [`Client`] that drives a
//!   single request/response exchange over a connection
//! - **[`network`]**: transport traits (`Connect`, `Read`, `Write`, `Close`),
//!   the TLS decorator hook and, with `std`, a TCP connector
//!
//! The parser and codec are pure functions: no I/O, no logging, no shared
//! state. They are safe to call from any thread on independent inputs.
//!
//! ## Usage
//!
//! ```rust
//! use libhttp::{Method, build_request, parse_response, parse_url};
//!
//! let url = parse_url("https://foo.com/bar?foo=bar#frag").unwrap();
//! assert_eq!(url.host(), "foo.com");
//! assert_eq!(url.port(), 443);
//!
//! let bytes = build_request(Method::Get, &url, &[("Accept", "*/*")], b"");
//! assert!(bytes.starts_with(b"GET /bar?foo=bar#frag HTTP/1.1\r\nHost: foo.com\r\n"));
//!
//! let response = parse_response(b"HTTP/1.1 204 No Content\r\n\r\n").unwrap();
//! assert_eq!(response.status, 204);
//! ```
//!
//! ### Client Example
//!
//! ```rust,no_run
//! use libhttp::Client;
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
//! let response = client.get("http://example.com/status");
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the TCP connector
//! - `async`: Enable the async transport traits and `AsyncClient`
//! - `defmt`: Enable defmt logging and `defmt::Format` for error types
//! - `log`: Enable logging through the `log` facade

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

#[macro_use]
mod fmt;

/// HTTP/1.1 request and response codec plus the client that drives them.
///
/// Contains the [`Method`](http::Method) set, the request serializer, the
/// response parser and the [`Client`](http::Client) orchestrator.
pub mod http;

/// Transport abstraction layer.
///
/// Traits for opening byte streams and reading from / writing to them. The
/// HTTP client is generic over these so any TCP stack, TLS wrapper or test
/// mock can carry its requests.
pub mod network;

/// URL grammar parser and percent-encoder.
pub mod url;

pub use http::request::build_request;
pub use http::response::parse_response;
pub use http::{Client, Method, Options, Request, Response};
pub use url::{Url, parse_url};
