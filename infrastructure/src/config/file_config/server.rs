//! HTTP server settings from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// ```toml
/// [server]
/// bind = "0.0.0.0:8080"
/// base_url = "https://chartroom.example.com"   # used in SMS result links
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub bind: String,
    /// Public URL prefix for links sent back to users
    pub base_url: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind.trim().parse()
    }

    /// `base_url` without a trailing slash
    pub fn public_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
