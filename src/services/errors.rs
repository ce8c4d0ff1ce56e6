// src/services/errors.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while decoding a record or a handshake body.
///
/// Every variant is terminal for the current decode; no partially decoded
/// structure is ever returned alongside one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TlsParserError {
    #[error("The lengths specified in the input are not valid.")]
    InvalidLength,

    #[error("The input is not a TLS handshake message (content type 0x{0:02X}).")]
    InvalidContentType(u8),

    #[error("The message is not of a supported version (TLS 1.0 - TLS 1.2), got 0x{0:02X}{1:02X}.")]
    InvalidVersion(u8, u8),

    #[error("Unsupported handshake message type: {0}.")]
    UnsupportedMessageType(u8),

    #[error(
        "The lengths specified in the input are not valid for client_key_exchange message \
         (declared {}, actual {}).",
        display_declared(.declared),
        .actual
    )]
    InvalidLengthForClientKeyExchange { declared: Option<u8>, actual: usize },
}

impl TlsParserError {
    /// Stable numeric code for the failure kind, used as the process exit code.
    pub fn code(&self) -> u8 {
        match self {
            TlsParserError::InvalidLength => 1,
            TlsParserError::InvalidContentType(_) => 2,
            TlsParserError::InvalidVersion(..) => 3,
            TlsParserError::UnsupportedMessageType(_) => 4,
            TlsParserError::InvalidLengthForClientKeyExchange { .. } => 5,
        }
    }
}

fn display_declared(declared: &Option<u8>) -> String {
    match declared {
        Some(length) => length.to_string(),
        None => "none".to_string(),
    }
}

// A short read on the wire cursor always means a length field lied.
impl From<io::Error> for TlsParserError {
    fn from(_: io::Error) -> Self {
        TlsParserError::InvalidLength
    }
}

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("IO Error: {0}")]
    IoError(#[from] io::Error),

    #[error("The path '{}' is not a regular file.", .0.display())]
    NotRegularFile(PathBuf),

    #[error(
        "The file '{}' is {} bytes, larger than the {} byte limit.",
        .path.display(),
        .size,
        .limit
    )]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Invalid hex input: {0}")]
    InvalidHexInput(String),

    #[error("{0}")]
    ParserError(#[from] TlsParserError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TlsError {
    /// Process exit code for this failure. Decode failures keep their own
    /// numbering; everything that happens around the decoder shares one code.
    pub fn exit_code(&self) -> u8 {
        match self {
            TlsError::ParserError(e) => e.code(),
            _ => 10,
        }
    }
}
