// src/services/tls_handshake/opaque.rs
//
// Messages whose payload is not interpreted. Only their framing is checked.

use crate::services::errors::TlsParserError;
use crate::services::tls_parser::serialize_hex;
use crate::services::wire_reader::WireReader;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub chain_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerKeyExchange {
    pub params_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientKeyExchange {
    #[serde(serialize_with = "serialize_hex")]
    pub exchange_keys: Vec<u8>,
}

impl ClientKeyExchange {
    pub fn params_length(&self) -> usize {
        self.exchange_keys.len()
    }
}

/// The chain itself is opaque; an empty one is the only thing we can reject.
pub fn parse_certificate(body: &[u8]) -> Result<Certificate, TlsParserError> {
    if body.is_empty() {
        return Err(TlsParserError::InvalidLength);
    }
    Ok(Certificate {
        chain_length: body.len(),
    })
}

pub fn parse_server_key_exchange(body: &[u8]) -> Result<ServerKeyExchange, TlsParserError> {
    Ok(ServerKeyExchange {
        params_length: body.len(),
    })
}

/// ServerHelloDone carries no body at all.
pub fn parse_server_hello_done(body: &[u8]) -> Result<(), TlsParserError> {
    if !body.is_empty() {
        return Err(TlsParserError::InvalidLength);
    }
    Ok(())
}

/// One length byte followed by exactly that many opaque bytes.
pub fn parse_client_key_exchange(body: &[u8]) -> Result<ClientKeyExchange, TlsParserError> {
    let mut reader = WireReader::new(body);

    let declared = reader
        .read_u8()
        .map_err(|_| TlsParserError::InvalidLengthForClientKeyExchange {
            declared: None,
            actual: 0,
        })?;

    if declared as usize != reader.remaining() {
        return Err(TlsParserError::InvalidLengthForClientKeyExchange {
            declared: Some(declared),
            actual: reader.remaining(),
        });
    }

    Ok(ClientKeyExchange {
        exchange_keys: reader.read_rest(),
    })
}
