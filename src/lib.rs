pub mod config;
pub mod services;

pub use services::errors::{TlsError, TlsParserError};
pub use services::tls_parser::{
    DecodedHandshake, HandshakeMessage, decode_handshake, is_valid_tls_version,
    parse_handshake_body, parse_tls_record,
};
