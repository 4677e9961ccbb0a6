use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub allowed_origin: String, // single browser client allowed by CORS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}
