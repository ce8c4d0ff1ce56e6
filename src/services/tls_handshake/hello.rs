// src/services/tls_handshake/hello.rs

use crate::services::errors::TlsParserError;
use crate::services::tls_parser::{TlsVersion, serialize_hex, serialize_hex_opt};
use crate::services::wire_reader::WireReader;
use chrono::{DateTime, Utc};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

pub const HELLO_RANDOM_BYTES_SIZE: usize = 28; // As specified in RFC 5246
pub const MAX_SESSION_ID_LEN: usize = 32;
pub const COMPRESSION_METHODS_LEN: u8 = 0x01; // The only offer size we accept
pub const COMPRESSION_METHOD_NULL: u8 = 0x00;

// version(2) + random(32) + session id length(1) + cipher suites length(2) + compression length(1)
pub const MIN_CLIENT_HELLO_SIZE: usize = 38;
// version(2) + random(32) + session id length(1) + cipher suite(2) + compression method(1)
pub const MIN_SERVER_HELLO_SIZE: usize = 38;

// ====================
// DATA STRUCTURES

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Random {
    pub gmt_unix_time: u32,
    #[serde(serialize_with = "serialize_hex")]
    pub random_bytes: [u8; HELLO_RANDOM_BYTES_SIZE],
}

impl Random {
    fn read(reader: &mut WireReader<'_>) -> Result<Self, TlsParserError> {
        Ok(Random {
            gmt_unix_time: reader.read_u32()?,
            random_bytes: reader.read_array()?,
        })
    }

    /// The 32-bit timestamp as a UTC date.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.gmt_unix_time), 0)
    }
}

/// Session resumption token, 0 to 32 opaque bytes. Empty means "none".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionId(#[serde(serialize_with = "serialize_hex")] pub Vec<u8>);

impl SessionId {
    fn read(reader: &mut WireReader<'_>) -> Result<Self, TlsParserError> {
        let length = reader.read_u8()? as usize;
        if length > MAX_SESSION_ID_LEN {
            return Err(TlsParserError::InvalidLength);
        }
        Ok(SessionId(reader.read_vec(length)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The raw cipher suite vector offered in a ClientHello (two bytes per suite).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherSuites(pub Vec<u8>);

impl CipherSuites {
    fn read(reader: &mut WireReader<'_>) -> Result<Self, TlsParserError> {
        let length = reader.read_u16()? as usize;
        let bytes = reader.read_vec(length)?;
        if length % 2 != 0 {
            return Err(TlsParserError::InvalidLength);
        }
        Ok(CipherSuites(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of two-byte suites in the list.
    pub fn count(&self) -> usize {
        self.0.len() / 2
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
    }
}

impl Serialize for CipherSuites {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for suite in self.iter() {
            seq.serialize_element(&format!("0x{:04X}", suite))?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientHello {
    pub version: TlsVersion,
    pub random: Random,
    pub session_id: SessionId,
    pub cipher_suites: CipherSuites,
    pub compression_method: u8,
    #[serde(serialize_with = "serialize_hex_opt")]
    pub extensions: Option<Vec<u8>>,
}

impl ClientHello {
    pub fn has_extensions(&self) -> bool {
        self.extensions.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerHello {
    pub version: TlsVersion,
    pub random: Random,
    pub session_id: SessionId,
    #[serde(serialize_with = "serialize_hex")]
    pub cipher_suite: [u8; 2],
    pub compression_method: u8,
    #[serde(serialize_with = "serialize_hex_opt")]
    pub extensions: Option<Vec<u8>>,
}

impl ServerHello {
    pub fn has_extensions(&self) -> bool {
        self.extensions.is_some()
    }

    pub fn cipher_suite_id(&self) -> u16 {
        u16::from_be_bytes(self.cipher_suite)
    }
}

// ====================
// DECODERS

/// Decodes a ClientHello body. Every byte of `body` ends up in exactly one
/// field; whatever follows the compression methods is kept as the opaque
/// extensions blob.
pub fn parse_client_hello(body: &[u8]) -> Result<ClientHello, TlsParserError> {
    if body.len() < MIN_CLIENT_HELLO_SIZE {
        return Err(TlsParserError::InvalidLength);
    }

    let mut reader = WireReader::new(body);

    let version = TlsVersion::read(&mut reader)?;
    let random = Random::read(&mut reader)?;
    let session_id = SessionId::read(&mut reader)?;
    let cipher_suites = CipherSuites::read(&mut reader)?;

    // Compression vector: one length byte and the single method it announces.
    reader.ensure(2)?;
    if reader.read_u8()? != COMPRESSION_METHODS_LEN {
        return Err(TlsParserError::InvalidLength);
    }
    let compression_method = reader.read_u8()?;

    let extensions = read_extensions(&mut reader);

    Ok(ClientHello {
        version,
        random,
        session_id,
        cipher_suites,
        compression_method,
        extensions,
    })
}

/// Decodes a ServerHello body: one chosen cipher suite and a bare
/// compression byte instead of the ClientHello vectors.
pub fn parse_server_hello(body: &[u8]) -> Result<ServerHello, TlsParserError> {
    if body.len() < MIN_SERVER_HELLO_SIZE {
        return Err(TlsParserError::InvalidLength);
    }

    let mut reader = WireReader::new(body);

    let version = TlsVersion::read(&mut reader)?;
    let random = Random::read(&mut reader)?;
    let session_id = SessionId::read(&mut reader)?;
    let cipher_suite = reader.read_array()?;
    let compression_method = reader.read_u8()?;

    let extensions = read_extensions(&mut reader);

    Ok(ServerHello {
        version,
        random,
        session_id,
        cipher_suite,
        compression_method,
        extensions,
    })
}

fn read_extensions(reader: &mut WireReader<'_>) -> Option<Vec<u8>> {
    if reader.is_empty() {
        None
    } else {
        Some(reader.read_rest())
    }
}
