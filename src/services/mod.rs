pub mod errors;
pub mod input_file;
pub mod inspector;
pub mod printer;
pub mod tls_handshake;
pub mod tls_parser;
pub mod wire_reader;
