// src/services/tls_handshake/mod.rs
pub mod hello;
pub mod messages;
pub mod opaque;
