// src/services/printer.rs

use super::errors::TlsError;
use super::tls_handshake::hello::{ClientHello, Random, ServerHello, SessionId};
use super::tls_parser::{DecodedHandshake, HandshakeMessage, HandshakeMessageType, TlsRecord};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y UTC";

/// Human readable report, one field per line.
pub fn render_text(decoded: &DecodedHandshake) -> String {
    TextReport(decoded).to_string()
}

pub fn render_json(decoded: &DecodedHandshake) -> Result<String, TlsError> {
    Ok(serde_json::to_string_pretty(decoded)?)
}

struct TextReport<'a>(&'a DecodedHandshake);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, &self.0.record)?;

        match &self.0.message {
            HandshakeMessage::ClientHello(hello) => write_client_hello(f, hello),
            HandshakeMessage::ServerHello(hello) => write_server_hello(f, hello),
            HandshakeMessage::Certificate(cert) => writeln!(
                f,
                "The certificate chain provided is {} bytes long.",
                cert.chain_length
            ),
            HandshakeMessage::ServerKeyExchange(ske) => writeln!(
                f,
                "The key exchange parameters provided are {} bytes long.",
                ske.params_length
            ),
            HandshakeMessage::ServerHelloDone => {
                writeln!(f, "The ServerHelloDone message is empty, as expected.")
            }
            HandshakeMessage::ClientKeyExchange(cke) => writeln!(
                f,
                "The key exchange parameters provided are {} bytes long.",
                cke.params_length()
            ),
        }
    }
}

fn write_record(f: &mut fmt::Formatter<'_>, record: &TlsRecord) -> fmt::Result {
    writeln!(f, "Identified the following TLS message:")?;
    writeln!(f)?;
    writeln!(f, "TLS Version: {}", record.header.version.label())?;
    writeln!(f, "Protocol type: {}", record.header.content_type.as_u8())?;
    writeln!(f, "Fragment length: {}", record.header.fragment_length)?;
    match HandshakeMessageType::try_from_u8(record.handshake.msg_type) {
        Some(kind) => writeln!(
            f,
            "Handshake message type: {} ({})",
            record.handshake.msg_type,
            kind.name()
        )?,
        None => writeln!(f, "Handshake message type: {}", record.handshake.msg_type)?,
    }
    writeln!(f, "Handshake body length: {}", record.handshake.body_length)?;
    writeln!(f)
}

fn write_client_hello(f: &mut fmt::Formatter<'_>, hello: &ClientHello) -> fmt::Result {
    writeln!(f, "Details of ClientHello:")?;
    writeln!(f)?;
    writeln!(f, "TLS Version: {}", hello.version.label())?;
    write_random(f, &hello.random)?;
    write_session_id(f, &hello.session_id)?;

    let suites: Vec<String> = hello
        .cipher_suites
        .iter()
        .map(|suite| format!("0x{:04X}", suite))
        .collect();
    writeln!(f, "Offered cipher suites ({}):", hello.cipher_suites.count())?;
    if suites.is_empty() {
        writeln!(f, "N/A")?;
    } else {
        writeln!(f, "{}", suites.join(" "))?;
    }

    writeln!(f, "Compression method: {}", hello.compression_method)?;
    write_extensions(f, hello.extensions.as_deref())
}

fn write_server_hello(f: &mut fmt::Formatter<'_>, hello: &ServerHello) -> fmt::Result {
    writeln!(f, "Details of ServerHello:")?;
    writeln!(f)?;
    writeln!(f, "TLS Version: {}", hello.version.label())?;
    write_random(f, &hello.random)?;
    write_session_id(f, &hello.session_id)?;
    writeln!(f, "Chosen cipher suite: 0x{:04X}", hello.cipher_suite_id())?;
    writeln!(f, "Compression method: {}", hello.compression_method)?;
    write_extensions(f, hello.extensions.as_deref())
}

fn write_random(f: &mut fmt::Formatter<'_>, random: &Random) -> fmt::Result {
    match random.timestamp() {
        Some(ts) => writeln!(f, "Timestamp: {}", ts.format(TIMESTAMP_FORMAT))?,
        None => writeln!(f, "Timestamp: {} (out of range)", random.gmt_unix_time)?,
    }
    writeln!(f, "Random data: {}", hex::encode(random.random_bytes))
}

fn write_session_id(f: &mut fmt::Formatter<'_>, session_id: &SessionId) -> fmt::Result {
    if session_id.is_empty() {
        writeln!(f, "SessionID: N/A")
    } else {
        writeln!(f, "SessionID: {}", hex::encode(session_id.as_bytes()))
    }
}

fn write_extensions(f: &mut fmt::Formatter<'_>, extensions: Option<&[u8]>) -> fmt::Result {
    match extensions {
        Some(raw) => {
            writeln!(f, "Has extensions: true")?;
            writeln!(f, "Raw extensions data ({} bytes):", raw.len())?;
            writeln!(f, "{}", hex::encode(raw))
        }
        None => writeln!(f, "Has extensions: false"),
    }
}
