#![cfg(feature = "std")]

use std::env;
use std::io::{Read as _, Write as _};
use std::net::TcpListener;
use std::thread;

use dotenvy::dotenv;
use libhttp::http::{Client, Error, Method, Options, TransportError};
use libhttp::network::Connect;
use libhttp::network::error::Error as NetError;
use libhttp::network::tcp::{TcpConnection, TcpConnector};

/// Sends every connection to a local port, whatever host the URL names.
struct Loopback {
    port: u16,
    inner: TcpConnector,
}

impl Connect for Loopback {
    type Connection = TcpConnection;
    type Error = NetError;

    fn connect(&mut self, _host: &str, _port: u16) -> Result<Self::Connection, Self::Error> {
        self.inner.connect("127.0.0.1", self.port)
    }
}

/// Accepts one connection, reads the request head and answers with `response`.
fn serve_once(response: &'static [u8]) -> (u16, thread::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 256];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response).unwrap();
        request
    });

    (port, handle)
}

#[test]
fn test_loopback_exchange() {
    let (port, server) =
        serve_once(b"HTTP/1.1 200 OK\r\nContent-Length: 11\r\nContent-Type: text/plain\r\n\r\nhello world");
    let options = Options {
        read_timeout_ms: Some(5_000),
        ..Options::default()
    };
    let connector = Loopback {
        port,
        inner: TcpConnector::from_options(&options),
    };
    let mut client = Client::with_options(connector, options);

    let response = client
        .send(Method::Get, "http://local.test/hello", &[("Accept", "text/plain")], b"")
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("content-type"), Some("text/plain"));
    assert_eq!(response.body_str(), Some("hello world"));

    let request = server.join().unwrap();
    assert_eq!(
        request,
        b"GET /hello HTTP/1.1\r\nHost: local.test\r\nAccept: text/plain\r\n\r\n"
    );
}

#[test]
fn test_loopback_reads_until_close() {
    let (port, server) = serve_once(b"HTTP/1.0 200 OK\r\n\r\nno length given");
    let mut client = Client::new(Loopback {
        port,
        inner: TcpConnector::new(),
    });

    let response = client.get("http://local.test/").unwrap();
    server.join().unwrap();

    assert_eq!(response.version, "HTTP/1.0");
    assert_eq!(response.body, b"no length given");
}

#[test]
fn test_connection_refused() {
    // Bind then drop to get a port nothing listens on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut client = Client::new(Loopback {
        port,
        inner: TcpConnector::new(),
    });

    assert_eq!(
        client.get("http://local.test/"),
        Err(Error::Transport(TransportError::Connect(NetError::ConnectionRefused)))
    );
}

#[test]
fn test_unresolvable_host() {
    let mut connector = TcpConnector::new();
    assert_eq!(
        connector.connect("host.invalid", 80).err(),
        Some(NetError::InvalidAddress)
    );
}

#[test]
#[ignore = "needs network access"]
fn test_live_get() {
    dotenv().ok();
    let host = env::var("TEST_HTTP_HOST").unwrap_or("httpbin.org".to_string());
    let options = Options {
        connect_timeout_ms: Some(5_000),
        read_timeout_ms: Some(5_000),
        ..Options::default()
    };
    let mut client = Client::with_options(TcpConnector::from_options(&options), options);

    let response = client
        .send(
            Method::Get,
            &format!("http://{host}/get"),
            &[("Connection", "close")],
            b"",
        )
        .unwrap();

    assert_eq!(response.status, 200);
}
