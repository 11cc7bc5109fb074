/*!
# Error Type

Unified error type for the engine, its file I/O, and the CLI driver. Every
fallible operation in this crate returns `gncut::Result<T>`, a thin alias
over `std::result::Result<T, GnError>`.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for all `gncut` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GnError {
    /// The input file is syntactically invalid, contains a self-loop, or
    /// repeats an edge.
    MalformedInput(String),

    /// An internal lookup was given an external node ID outside the build
    /// set. Should never happen in practice; indicates a logic error.
    UnknownNode(String),

    /// `edge_id_of` or `cut` was asked about an edge that does not exist or
    /// is no longer live.
    NoSuchEdge(String),

    /// A file could not be opened, read, or written.
    IoError(String),

    /// A CLI argument failed validation (`num_clusters < 1`, sample rate
    /// out of range, ...).
    InvalidArguments(String),
}

impl GnError {
    /// Creates a `MalformedInput` error.
    pub fn malformed_input(message: impl Into<String>) -> Self {
        GnError::MalformedInput(message.into())
    }

    /// Creates an `UnknownNode` error.
    pub fn unknown_node(message: impl Into<String>) -> Self {
        GnError::UnknownNode(message.into())
    }

    /// Creates a `NoSuchEdge` error.
    pub fn no_such_edge(message: impl Into<String>) -> Self {
        GnError::NoSuchEdge(message.into())
    }

    /// Creates an `InvalidArguments` error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        GnError::InvalidArguments(message.into())
    }

    /// The process exit code this error should map to, per the CLI
    /// contract (0 is reserved for success and is never produced here).
    pub fn exit_code(&self) -> i32 {
        match self {
            GnError::MalformedInput(_) => 1,
            GnError::IoError(_) => 2,
            GnError::InvalidArguments(_) => 3,
            // Both indicate an internal logic error rather than a user
            // mistake; treat them as malformed-input-adjacent failures.
            GnError::UnknownNode(_) | GnError::NoSuchEdge(_) => 1,
        }
    }
}

impl fmt::Display for GnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GnError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            GnError::UnknownNode(msg) => write!(f, "unknown node: {}", msg),
            GnError::NoSuchEdge(msg) => write!(f, "no such edge: {}", msg),
            GnError::IoError(msg) => write!(f, "I/O error: {}", msg),
            GnError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
        }
    }
}

impl Error for GnError {}

impl From<std::io::Error> for GnError {
    fn from(e: std::io::Error) -> Self {
        GnError::IoError(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GnError>;
