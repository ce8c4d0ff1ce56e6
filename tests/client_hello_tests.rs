mod common;

use common::{hello_prefix, record_for, sample_client_hello};
use tls_handshake_inspector::services::tls_handshake::hello::{
    CipherSuites, ClientHello, SessionId, parse_client_hello,
};
use tls_handshake_inspector::services::tls_handshake::messages::build_handshake_record;
use tls_handshake_inspector::services::tls_parser::{HandshakeMessageType, TlsVersion};
use tls_handshake_inspector::{HandshakeMessage, TlsParserError, decode_handshake};

fn decode_client_hello_record(hello: &ClientHello) -> ClientHello {
    let raw = record_for(HandshakeMessageType::ClientHello, &hello.to_bytes());
    match decode_handshake(&raw).unwrap().message {
        HandshakeMessage::ClientHello(decoded) => decoded,
        other => panic!("expected ClientHello, got {other:?}"),
    }
}

#[test]
fn test_client_hello_round_trip_with_and_without_extensions() {
    for n in [0usize, 1, 2, 7, 64] {
        let extensions = (n > 0).then(|| (0..n).map(|i| i as u8).collect::<Vec<u8>>());
        let hello = sample_client_hello(extensions);

        let decoded = decode_client_hello_record(&hello);

        assert_eq!(decoded, hello);
        assert_eq!(decoded.has_extensions(), n > 0);
        assert_eq!(decoded.cipher_suites.count(), 2);
        assert_eq!(decoded.cipher_suites.iter().collect::<Vec<_>>(), vec![0xC02F, 0x009E]);
        assert!(decoded.session_id.is_empty());
    }
}

#[test]
fn test_client_hello_fields() {
    let mut hello = sample_client_hello(Some(vec![0x00, 0x0D, 0x00, 0x00]));
    hello.version = TlsVersion::TLS1_0;
    hello.session_id = SessionId(vec![0x42; 32]);

    let decoded = parse_client_hello(&hello.to_bytes()).unwrap();

    assert_eq!(decoded.version, TlsVersion::TLS1_0);
    assert_eq!(decoded.random.gmt_unix_time, 0x5F5E_1000);
    assert_eq!(decoded.random.random_bytes, [0xAB; 28]);
    assert_eq!(decoded.session_id.as_bytes(), &[0x42; 32][..]);
    assert_eq!(decoded.compression_method, 0);
    assert_eq!(decoded.extensions, Some(vec![0x00, 0x0D, 0x00, 0x00]));
}

#[test]
fn test_client_hello_with_empty_cipher_suite_list() {
    let mut body = hello_prefix();
    body.push(0x00); // session id
    body.extend_from_slice(&[0x00, 0x00]); // no suites
    body.extend_from_slice(&[0x01, 0x00]); // null compression
    assert_eq!(body.len(), 39);

    let decoded = parse_client_hello(&body).unwrap();
    assert!(decoded.cipher_suites.is_empty());
    assert_eq!(decoded.cipher_suites, CipherSuites::default());
    assert!(!decoded.has_extensions());
}

#[test]
fn test_client_hello_below_minimum_size() {
    let body = sample_client_hello(None).to_bytes();
    for len in 0..38 {
        assert_eq!(parse_client_hello(&body[..len]).unwrap_err(), TlsParserError::InvalidLength);
    }
}

#[test]
fn test_client_hello_invalid_version() {
    let mut body = sample_client_hello(None).to_bytes();
    body[0] = 0x03;
    body[1] = 0x04;
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidVersion(3, 4));
}

#[test]
fn test_session_id_longer_than_buffer() {
    let mut body = hello_prefix();
    body.push(10); // declares 10 bytes
    body.extend_from_slice(&[0x00, 0x00, 0x00]);
    assert_eq!(body.len(), 38);
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidLength);
}

#[test]
fn test_session_id_longer_than_32_bytes() {
    let mut body = hello_prefix();
    body.push(33);
    body.extend_from_slice(&[0x77; 33]);
    body.extend_from_slice(&[0x00, 0x02, 0xC0, 0x2F, 0x01, 0x00]);
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidLength);
}

#[test]
fn test_cipher_suite_list_longer_than_buffer() {
    let mut body = hello_prefix();
    body.push(0x00);
    body.extend_from_slice(&[0x00, 0x40]); // 64 bytes of suites promised
    body.extend_from_slice(&[0xC0, 0x2F, 0x01, 0x00]);
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidLength);
}

#[test]
fn test_odd_cipher_suite_list_rejected() {
    let mut body = hello_prefix();
    body.push(0x00);
    body.extend_from_slice(&[0x00, 0x03, 0xC0, 0x2F, 0x00]);
    body.extend_from_slice(&[0x01, 0x00]);
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidLength);
}

#[test]
fn test_multiple_compression_methods_rejected() {
    let mut body = hello_prefix();
    body.push(0x00);
    body.extend_from_slice(&[0x00, 0x02, 0xC0, 0x2F]);
    body.extend_from_slice(&[0x02, 0x00, 0x01]);
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidLength);
}

#[test]
fn test_zero_compression_methods_rejected() {
    let mut body = hello_prefix();
    body.push(0x00);
    body.extend_from_slice(&[0x00, 0x02, 0xC0, 0x2F]);
    body.extend_from_slice(&[0x00, 0x00]);
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidLength);
}

#[test]
fn test_missing_compression_method_byte() {
    let mut body = hello_prefix();
    body.push(0x00);
    body.extend_from_slice(&[0x00, 0x02, 0xC0, 0x2F]);
    body.push(0x01);
    assert_eq!(body.len(), 40);
    assert_eq!(parse_client_hello(&body).unwrap_err(), TlsParserError::InvalidLength);
}

#[test]
fn test_client_hello_inside_tls_1_0_record() {
    let hello = sample_client_hello(Some(vec![0xFF, 0x01, 0x00, 0x01, 0x00]));
    let raw = build_handshake_record(
        HandshakeMessageType::ClientHello,
        TlsVersion::TLS1_0,
        &hello.to_bytes(),
    );

    let decoded = decode_handshake(&raw).unwrap();
    assert_eq!(decoded.record.header.version, TlsVersion::TLS1_0);
    assert_eq!(decoded.record.handshake.body_length as usize, hello.to_bytes().len());
    assert_eq!(decoded.message, HandshakeMessage::ClientHello(hello));
}
