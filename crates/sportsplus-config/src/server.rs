use std::net::SocketAddr;

use crate::env_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("HOST", defaults.host),
            port: env_or("PORT", defaults.port),
        }
    }

    /// Parses `host:port`; an unparseable host falls back to all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_matches_legacy_deployments() {
        assert_eq!(ServerConfig::default().port, 5000);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_socket_addr_bad_host_falls_back() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 9000,
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
    }
}
