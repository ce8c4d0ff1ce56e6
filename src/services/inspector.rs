// src/services/inspector.rs

use crate::config::Config;
use crate::services::errors::TlsError;
use crate::services::input_file::{decode_hex_input, load_input_file};
use crate::services::tls_parser::{DecodedHandshake, decode_handshake};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// The file holds the record bytes as captured.
    #[default]
    Binary,
    /// The file holds a hex dump of the record.
    Hex,
}

pub fn inspect_bytes(raw: &[u8]) -> Result<DecodedHandshake, TlsError> {
    debug!(size = raw.len(), "decoding handshake record");

    match decode_handshake(raw) {
        Ok(decoded) => {
            info!(
                msg_type = decoded.message.message_type().name(),
                version = decoded.record.header.version.label(),
                body_length = decoded.record.handshake.body_length,
                "decoded handshake message"
            );
            Ok(decoded)
        }
        Err(e) => {
            warn!(error = %e, code = e.code(), "handshake decode failed");
            Err(e.into())
        }
    }
}

pub fn inspect_file(path: &Path, format: InputFormat, config: &Config) -> Result<DecodedHandshake, TlsError> {
    let data = load_input_file(path, config.max_file_size)?;

    let raw = match format {
        InputFormat::Binary => data,
        InputFormat::Hex => decode_hex_input(&data)?,
    };

    inspect_bytes(&raw)
}
