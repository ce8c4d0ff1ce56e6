#![allow(dead_code)]

use tls_handshake_inspector::services::tls_handshake::hello::{
    CipherSuites, ClientHello, Random, ServerHello, SessionId,
};
use tls_handshake_inspector::services::tls_handshake::messages::build_handshake_record;
use tls_handshake_inspector::services::tls_parser::{HandshakeMessageType, TlsVersion};

pub const SERVER_HELLO_DONE_RECORD: [u8; 9] = [0x16, 0x03, 0x03, 0x00, 0x04, 0x0E, 0x00, 0x00, 0x00];

pub fn sample_random() -> Random {
    Random {
        gmt_unix_time: 0x5F5E_1000,
        random_bytes: [0xAB; 28],
    }
}

/// ClientHello with an empty session id, two suites and one null compression method.
pub fn sample_client_hello(extensions: Option<Vec<u8>>) -> ClientHello {
    ClientHello {
        version: TlsVersion::TLS1_2,
        random: sample_random(),
        session_id: SessionId::default(),
        cipher_suites: CipherSuites(vec![0xC0, 0x2F, 0x00, 0x9E]),
        compression_method: 0,
        extensions,
    }
}

pub fn sample_server_hello(extensions: Option<Vec<u8>>) -> ServerHello {
    ServerHello {
        version: TlsVersion::TLS1_2,
        random: sample_random(),
        session_id: SessionId(vec![0x11; 32]),
        cipher_suite: [0xC0, 0x2F],
        compression_method: 0,
        extensions,
    }
}

pub fn record_for(msg_type: HandshakeMessageType, body: &[u8]) -> Vec<u8> {
    build_handshake_record(msg_type, TlsVersion::TLS1_2, body)
}

/// version + random, the fixed 34-byte prefix of both hello messages.
pub fn hello_prefix() -> Vec<u8> {
    let mut body = vec![0x03, 0x03];
    body.extend_from_slice(&0x5F5E_1000u32.to_be_bytes());
    body.extend_from_slice(&[0xAB; 28]);
    body
}

pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("tls-inspect-{}-{}", std::process::id(), name))
}
