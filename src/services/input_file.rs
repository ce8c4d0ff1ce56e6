// src/services/input_file.rs

use super::errors::TlsError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a capture from disk. Only regular files are accepted (no symlinks,
/// directories, sockets or devices) and anything above `max_size` bytes is
/// refused before it is read.
pub fn load_input_file(path: &Path, max_size: u64) -> Result<Vec<u8>, TlsError> {
    let metadata = fs::symlink_metadata(path)?;

    if !metadata.file_type().is_file() {
        warn!(path = %path.display(), "refusing to read non-regular file");
        return Err(TlsError::NotRegularFile(path.to_path_buf()));
    }

    if metadata.len() > max_size {
        return Err(TlsError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: max_size,
        });
    }

    let data = fs::read(path)?;

    // The file may have grown between the stat and the read.
    if data.len() as u64 > max_size {
        return Err(TlsError::FileTooLarge {
            path: path.to_path_buf(),
            size: data.len() as u64,
            limit: max_size,
        });
    }

    debug!(path = %path.display(), size = data.len(), "loaded input file");
    Ok(data)
}

/// Turns a hex dump (`16 03 03 00 04`, `0x16 0x03 ...` or one long string)
/// into raw bytes. ASCII whitespace between tokens is ignored.
pub fn decode_hex_input(text: &[u8]) -> Result<Vec<u8>, TlsError> {
    let text = std::str::from_utf8(text)
        .map_err(|_| TlsError::InvalidHexInput("input is not valid UTF-8".to_string()))?;

    let digits: String = text
        .split_ascii_whitespace()
        .map(|token| {
            token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect();

    hex::decode(&digits).map_err(|e| TlsError::InvalidHexInput(e.to_string()))
}
