#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use libhttp::network::error::Error;
use libhttp::network::*;

/// What happened on the wire, shared between a network and the connections
/// it hands out so tests can inspect it after the client is done.
#[derive(Debug, Default)]
pub struct Wire {
    pub written: Vec<u8>,
    pub flushes: usize,
    pub closed: bool,
    pub reads: usize,
    pub server_names: Vec<String>,
    pub secured: bool,
}

#[derive(Debug)]
pub struct MockConnection {
    reads: VecDeque<Result<Vec<u8>, Error>>,
    write_limit: Option<usize>,
    write_error: Option<Error>,
    close_error: Option<Error>,
    wire: Rc<RefCell<Wire>>,
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.wire.borrow_mut().reads += 1;
        match self.reads.pop_front() {
            None => Ok(0),
            Some(Err(e)) => Err(e),
            Some(Ok(mut chunk)) => {
                let len = buf.len().min(chunk.len());
                buf[..len].copy_from_slice(&chunk[..len]);
                if len < chunk.len() {
                    // Hand the rest out on the next read.
                    self.reads.push_front(Ok(chunk.split_off(len)));
                }
                Ok(len)
            }
        }
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if let Some(e) = self.write_error {
            return Err(e);
        }
        let len = self.write_limit.map_or(buf.len(), |limit| buf.len().min(limit));
        self.wire.borrow_mut().written.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().flushes += 1;
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().closed = true;
        match self.close_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Connection for MockConnection {}

/// Hands out connections that replay `reads` and record what is written.
#[derive(Debug, Default)]
pub struct MockNetwork {
    pub reads: Vec<Result<Vec<u8>, Error>>,
    pub connect_error: Option<Error>,
    pub write_limit: Option<usize>,
    pub write_error: Option<Error>,
    pub close_error: Option<Error>,
    pub connects: Vec<(String, u16)>,
    pub wire: Rc<RefCell<Wire>>,
}

impl MockNetwork {
    /// A network whose connections send `data` in one read and then close.
    pub fn responding(data: &[u8]) -> Self {
        Self::with_reads(vec![Ok(data.to_vec())])
    }

    pub fn with_reads(reads: Vec<Result<Vec<u8>, Error>>) -> Self {
        Self {
            reads,
            ..Self::default()
        }
    }

    /// Splits `data` into reads of at most `size` bytes.
    pub fn trickling(data: &[u8], size: usize) -> Self {
        Self::with_reads(data.chunks(size).map(|c| Ok(c.to_vec())).collect())
    }

    pub fn written(&self) -> String {
        String::from_utf8(self.wire.borrow().written.clone()).unwrap()
    }

    pub fn closed(&self) -> bool {
        self.wire.borrow().closed
    }

    pub fn secured(&self) -> bool {
        self.wire.borrow().secured
    }

    pub fn server_names(&self) -> Vec<String> {
        self.wire.borrow().server_names.clone()
    }

    fn open(&mut self, host: &str, port: u16) -> Result<MockConnection, Error> {
        self.connects.push((host.to_string(), port));
        if let Some(e) = self.connect_error {
            return Err(e);
        }
        Ok(MockConnection {
            reads: self.reads.iter().cloned().collect(),
            write_limit: self.write_limit,
            write_error: self.write_error,
            close_error: self.close_error,
            wire: Rc::clone(&self.wire),
        })
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        self.open(host, port)
    }
}

/// Marks streams as secured on their wire, recording the server name asked
/// for. With `fail` set the handshake is refused and the stream handed back.
#[derive(Debug, Default)]
pub struct MockTls {
    pub fail: bool,
}

impl MockTls {
    fn secure(
        &mut self,
        server_name: &str,
        stream: MockConnection,
    ) -> Result<MockConnection, (Error, MockConnection)> {
        let mut wire = stream.wire.borrow_mut();
        wire.server_names.push(server_name.to_string());
        if self.fail {
            drop(wire);
            return Err((Error::HandshakeFailed, stream));
        }
        wire.secured = true;
        drop(wire);
        Ok(stream)
    }
}

impl Handshake<MockConnection> for MockTls {
    type Stream = MockConnection;
    type Error = Error;

    fn handshake(
        &mut self,
        server_name: &str,
        stream: MockConnection,
    ) -> Result<MockConnection, (Error, MockConnection)> {
        self.secure(server_name, stream)
    }
}

#[cfg(feature = "async")]
mod async_impls {
    use super::*;

    impl AsyncRead for MockConnection {
        type Error = Error;
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            Read::read(self, buf)
        }
    }

    impl AsyncWrite for MockConnection {
        type Error = Error;
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            Write::write(self, buf)
        }
        async fn flush(&mut self) -> Result<(), Self::Error> {
            Write::flush(self)
        }
    }

    impl AsyncClose for MockConnection {
        type Error = Error;
        async fn close(self) -> Result<(), Self::Error> {
            Close::close(self)
        }
    }

    impl AsyncConnection for MockConnection {}

    impl AsyncConnect for MockNetwork {
        type Connection = MockConnection;
        type Error = Error;

        async fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
            self.open(host, port)
        }
    }

    impl AsyncHandshake<MockConnection> for MockTls {
        type Stream = MockConnection;
        type Error = Error;

        async fn handshake(
            &mut self,
            server_name: &str,
            stream: MockConnection,
        ) -> Result<MockConnection, (Error, MockConnection)> {
            self.secure(server_name, stream)
        }
    }
}
