// src/services/tls_parser.rs

use super::errors::TlsParserError;
use super::tls_handshake::hello::{ClientHello, ServerHello, parse_client_hello, parse_server_hello};
use super::tls_handshake::opaque::{
    Certificate, ClientKeyExchange, ServerKeyExchange, parse_certificate,
    parse_client_key_exchange, parse_server_hello_done, parse_server_key_exchange,
};
use super::wire_reader::WireReader;
use serde::{Serialize, Serializer};

// --- Public Constants for TLS Protocol Values ---
pub const TLS_MAJOR: u8 = 0x03;
pub const TLS_1_0_MINOR: u8 = 0x01;
pub const TLS_1_1_MINOR: u8 = 0x02;
pub const TLS_1_2_MINOR: u8 = 0x03;

// ContentType(1) + ProtocolVersion(2) + Length(2)
pub const RECORD_HEADER_LEN: usize = 5;
// HandshakeType(1) + uint24 length(3)
pub const HANDSHAKE_HEADER_LEN: usize = 4;

// Inputs above this are refused before they ever reach the decoder.
pub const MAXIMUM_FILE_SIZE: u64 = 20_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum TlsContentType {
    ChangeCipherSpec = 0x14,
    Alert = 0x15,
    Handshake = 0x16,
    ApplicationData = 0x17,
}

impl TlsContentType {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn try_from_u8(value: u8) -> Option<Self> {
        match value {
            0x14 => Some(TlsContentType::ChangeCipherSpec),
            0x15 => Some(TlsContentType::Alert),
            0x16 => Some(TlsContentType::Handshake),
            0x17 => Some(TlsContentType::ApplicationData),
            _ => None,
        }
    }
}

/// The handshake messages this decoder understands. Anything else is
/// rejected with `TlsParserError::UnsupportedMessageType`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[repr(u8)]
pub enum HandshakeMessageType {
    ClientHello = 0x01,
    ServerHello = 0x02,
    Certificate = 0x0B,
    ServerKeyExchange = 0x0C,
    ServerHelloDone = 0x0E,
    ClientKeyExchange = 0x10,
}

impl HandshakeMessageType {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn try_from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(HandshakeMessageType::ClientHello),
            0x02 => Some(HandshakeMessageType::ServerHello),
            0x0B => Some(HandshakeMessageType::Certificate),
            0x0C => Some(HandshakeMessageType::ServerKeyExchange),
            0x0E => Some(HandshakeMessageType::ServerHelloDone),
            0x10 => Some(HandshakeMessageType::ClientKeyExchange),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandshakeMessageType::ClientHello => "ClientHello",
            HandshakeMessageType::ServerHello => "ServerHello",
            HandshakeMessageType::Certificate => "Certificate",
            HandshakeMessageType::ServerKeyExchange => "ServerKeyExchange",
            HandshakeMessageType::ServerHelloDone => "ServerHelloDone",
            HandshakeMessageType::ClientKeyExchange => "ClientKeyExchange",
        }
    }
}

/// A protocol version that passed validation. Only TLS 1.0 through 1.2
/// can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TlsVersion {
    #[serde(rename = "TLS 1.0")]
    TLS1_0, // 0x0301
    #[serde(rename = "TLS 1.1")]
    TLS1_1, // 0x0302
    #[serde(rename = "TLS 1.2")]
    TLS1_2, // 0x0303
}

impl TlsVersion {
    pub fn from_u8_pair(major: u8, minor: u8) -> Option<Self> {
        match (major, minor) {
            (TLS_MAJOR, TLS_1_0_MINOR) => Some(TlsVersion::TLS1_0),
            (TLS_MAJOR, TLS_1_1_MINOR) => Some(TlsVersion::TLS1_1),
            (TLS_MAJOR, TLS_1_2_MINOR) => Some(TlsVersion::TLS1_2),
            _ => None,
        }
    }

    pub fn to_u8_pair(&self) -> (u8, u8) {
        match self {
            TlsVersion::TLS1_0 => (TLS_MAJOR, TLS_1_0_MINOR),
            TlsVersion::TLS1_1 => (TLS_MAJOR, TLS_1_1_MINOR),
            TlsVersion::TLS1_2 => (TLS_MAJOR, TLS_1_2_MINOR),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TlsVersion::TLS1_0 => "1.0",
            TlsVersion::TLS1_1 => "1.1",
            TlsVersion::TLS1_2 => "1.2",
        }
    }

    /// Reads a two byte version field and rejects anything outside 1.0 - 1.2.
    pub(crate) fn read(reader: &mut WireReader<'_>) -> Result<Self, TlsParserError> {
        let major = reader.read_u8()?;
        let minor = reader.read_u8()?;
        TlsVersion::from_u8_pair(major, minor).ok_or(TlsParserError::InvalidVersion(major, minor))
    }
}

/// True only for (3,1), (3,2) and (3,3).
pub fn is_valid_tls_version(major: u8, minor: u8) -> bool {
    TlsVersion::from_u8_pair(major, minor).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordHeader {
    pub content_type: TlsContentType,
    pub version: TlsVersion,
    pub fragment_length: u16,
}

/// Handshake framing as read off the wire. The type byte is kept raw here;
/// dispatch decides whether it is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandshakeHeader {
    pub msg_type: u8,
    pub body_length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsRecord {
    pub header: RecordHeader,
    pub handshake: HandshakeHeader,
    #[serde(skip)]
    pub body: Vec<u8>,
}

/// One fully decoded handshake message, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "message", rename_all = "snake_case")]
pub enum HandshakeMessage {
    ClientHello(ClientHello),
    ServerHello(ServerHello),
    Certificate(Certificate),
    ServerKeyExchange(ServerKeyExchange),
    ServerHelloDone,
    ClientKeyExchange(ClientKeyExchange),
}

impl HandshakeMessage {
    pub fn message_type(&self) -> HandshakeMessageType {
        match self {
            HandshakeMessage::ClientHello(_) => HandshakeMessageType::ClientHello,
            HandshakeMessage::ServerHello(_) => HandshakeMessageType::ServerHello,
            HandshakeMessage::Certificate(_) => HandshakeMessageType::Certificate,
            HandshakeMessage::ServerKeyExchange(_) => HandshakeMessageType::ServerKeyExchange,
            HandshakeMessage::ServerHelloDone => HandshakeMessageType::ServerHelloDone,
            HandshakeMessage::ClientKeyExchange(_) => HandshakeMessageType::ClientKeyExchange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedHandshake {
    pub record: TlsRecord,
    #[serde(flatten)]
    pub message: HandshakeMessage,
}

// -- serde helpers --
pub(crate) fn serialize_hex<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&hex::encode(bytes))
}

pub(crate) fn serialize_hex_opt<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bytes {
        Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
        None => serializer.serialize_none(),
    }
}

// -- functions --

/// Decodes the record header and the handshake header that follows it, and
/// copies out the handshake body.
///
/// The input must hold exactly one record carrying exactly one handshake
/// message: `fragment_length + 5` has to equal the input size and
/// `fragment_length` has to equal `body_length + 4`.
pub fn parse_tls_record(raw: &[u8]) -> Result<TlsRecord, TlsParserError> {
    if raw.len() <= RECORD_HEADER_LEN {
        return Err(TlsParserError::InvalidLength);
    }

    let mut reader = WireReader::new(raw);

    let content_type_byte = reader.read_u8()?;
    let content_type = match TlsContentType::try_from_u8(content_type_byte) {
        Some(TlsContentType::Handshake) => TlsContentType::Handshake,
        _ => return Err(TlsParserError::InvalidContentType(content_type_byte)),
    };

    let version = TlsVersion::read(&mut reader)?;

    let fragment_length = reader.read_u16()?;
    if fragment_length as usize + RECORD_HEADER_LEN != raw.len() {
        return Err(TlsParserError::InvalidLength);
    }

    let msg_type = reader.read_u8()?;
    let body_length = reader.read_u24()?;
    if fragment_length as usize != body_length as usize + HANDSHAKE_HEADER_LEN {
        return Err(TlsParserError::InvalidLength);
    }

    let body = reader.read_vec(body_length as usize)?;

    Ok(TlsRecord {
        header: RecordHeader {
            content_type,
            version,
            fragment_length,
        },
        handshake: HandshakeHeader {
            msg_type,
            body_length,
        },
        body,
    })
}

/// Routes a handshake body to the decoder for its message type.
pub fn parse_handshake_body(msg_type: u8, body: &[u8]) -> Result<HandshakeMessage, TlsParserError> {
    let kind = HandshakeMessageType::try_from_u8(msg_type)
        .ok_or(TlsParserError::UnsupportedMessageType(msg_type))?;

    let message = match kind {
        HandshakeMessageType::ClientHello => HandshakeMessage::ClientHello(parse_client_hello(body)?),
        HandshakeMessageType::ServerHello => HandshakeMessage::ServerHello(parse_server_hello(body)?),
        HandshakeMessageType::Certificate => HandshakeMessage::Certificate(parse_certificate(body)?),
        HandshakeMessageType::ServerKeyExchange => {
            HandshakeMessage::ServerKeyExchange(parse_server_key_exchange(body)?)
        }
        HandshakeMessageType::ServerHelloDone => {
            parse_server_hello_done(body)?;
            HandshakeMessage::ServerHelloDone
        }
        HandshakeMessageType::ClientKeyExchange => {
            HandshakeMessage::ClientKeyExchange(parse_client_key_exchange(body)?)
        }
    };

    Ok(message)
}

/// Record layer plus body dispatch in one call.
pub fn decode_handshake(raw: &[u8]) -> Result<DecodedHandshake, TlsParserError> {
    let record = parse_tls_record(raw)?;
    let message = parse_handshake_body(record.handshake.msg_type, &record.body)?;
    Ok(DecodedHandshake { record, message })
}
