// src/services/tls_handshake/messages.rs
//
// Wire encoders for the decoded structures. Used to build captures by hand.

use crate::services::tls_handshake::hello::{COMPRESSION_METHODS_LEN, ClientHello, ServerHello};
use crate::services::tls_parser::{HandshakeMessageType, TlsContentType, TlsVersion};

// Helper function to build a TLS record
pub fn build_tls_record(content_type: TlsContentType, tls_version: TlsVersion, payload: &[u8]) -> Vec<u8> {
    let mut record = Vec::with_capacity(5 + payload.len());
    record.push(content_type.as_u8());
    let (record_major, record_minor) = tls_version.to_u8_pair();
    record.push(record_major);
    record.push(record_minor);
    record.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    record.extend_from_slice(payload);
    record
}

/// Prefixes a body with its handshake type and uint24 length.
pub fn build_handshake_message(msg_type: u8, body: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(4 + body.len());
    message.push(msg_type);
    let handshake_len_bytes = (body.len() as u32).to_be_bytes();
    message.extend_from_slice(&handshake_len_bytes[1..4]);
    message.extend_from_slice(body);
    message
}

/// A complete capture: one handshake record holding one message.
pub fn build_handshake_record(msg_type: HandshakeMessageType, tls_version: TlsVersion, body: &[u8]) -> Vec<u8> {
    let handshake = build_handshake_message(msg_type.as_u8(), body);
    build_tls_record(TlsContentType::Handshake, tls_version, &handshake)
}

impl ClientHello {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut payload = Vec::new();

        let (major, minor) = self.version.to_u8_pair();
        payload.extend_from_slice(&[major, minor]);

        payload.extend_from_slice(&self.random.gmt_unix_time.to_be_bytes());
        payload.extend_from_slice(&self.random.random_bytes);

        payload.push(self.session_id.len() as u8);
        payload.extend_from_slice(self.session_id.as_bytes());

        let suites = self.cipher_suites.as_bytes();
        payload.extend_from_slice(&(suites.len() as u16).to_be_bytes());
        payload.extend_from_slice(suites);

        payload.push(COMPRESSION_METHODS_LEN);
        payload.push(self.compression_method);

        if let Some(extensions) = &self.extensions {
            payload.extend_from_slice(extensions);
        }

        payload
    }
}

impl ServerHello {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut payload = Vec::new();

        let (major, minor) = self.version.to_u8_pair();
        payload.extend_from_slice(&[major, minor]);

        payload.extend_from_slice(&self.random.gmt_unix_time.to_be_bytes());
        payload.extend_from_slice(&self.random.random_bytes);

        payload.push(self.session_id.len() as u8);
        payload.extend_from_slice(self.session_id.as_bytes());

        payload.extend_from_slice(&self.cipher_suite);
        payload.push(self.compression_method);

        if let Some(extensions) = &self.extensions {
            payload.extend_from_slice(extensions);
        }

        payload
    }
}
