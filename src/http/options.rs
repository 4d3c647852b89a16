use serde::{Deserialize, Serialize};

/// Default size of each read from the connection, in bytes.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// Default cap on the buffered response, in bytes.
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 1024 * 1024;

/// Configuration for [`Client`](super::Client) and the bundled connectors.
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes.
///
/// # Examples
///
/// ```rust
/// use libhttp::http::Options;
///
/// let options = Options::from_json(r#"{"read_timeout_ms": 5000}"#).unwrap();
/// assert_eq!(options.read_timeout_ms, Some(5000));
/// assert_eq!(options.read_chunk_size, 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of bytes requested from the connection per read.
    pub read_chunk_size: usize,

    /// Largest response the client buffers before giving up.
    pub max_response_size: usize,

    /// Time allowed for establishing a connection, in milliseconds.
    ///
    /// Applied by the connector; the client itself never times out.
    pub connect_timeout_ms: Option<u64>,

    /// Time a single read may block, in milliseconds.
    pub read_timeout_ms: Option<u64>,

    /// Time a single write may block, in milliseconds.
    pub write_timeout_ms: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
            connect_timeout_ms: None,
            read_timeout_ms: None,
            write_timeout_ms: None,
        }
    }
}

impl Options {
    /// Loads options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json_core::de::Error> {
        serde_json_core::from_str(json).map(|(options, _)| options)
    }

    /// The read chunk size, never less than one byte.
    /// Size of the read buffer: at least one byte and never more than one
    /// byte past the response cap.
    pub(crate) fn chunk_size(&self) -> usize {
        self.read_chunk_size
            .clamp(1, self.max_response_size.saturating_add(1))
    }
}
