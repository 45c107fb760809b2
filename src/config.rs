//! Server bind configuration.
//!
//! The bind address is a dotted-quad IPv4 string validated octet by octet.
//! An invalid address falls back to [`DEFAULT_IP`] silently (with a warning
//! log) rather than failing startup; the port defaults to [`DEFAULT_PORT`].

use tracing::warn;

/// Default bind address: all interfaces.
pub const DEFAULT_IP: &str = "0.0.0.0";

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 3075;

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Dotted-quad IPv4 bind address.
    pub ip: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build a config, validating the address octet by octet.
    ///
    /// A malformed address is replaced by [`DEFAULT_IP`].
    #[must_use]
    pub fn new(ip: &str, port: u16) -> Self {
        let ip = if is_dotted_quad(ip) {
            ip.to_string()
        } else {
            warn!(ip, "not a dotted-quad IPv4 address, binding to default");
            DEFAULT_IP.to_string()
        };
        Self { ip, port }
    }

    /// Render the `ip:port` pair the listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

/// Four dot-separated groups of 1-3 digits, each in 0..=255.
fn is_dotted_quad(s: &str) -> bool {
    let octets: Vec<&str> = s.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty()
                && octet.len() <= 3
                && octet.chars().all(|c| c.is_ascii_digit())
                && octet.parse::<u16>().map(|n| n <= 255).unwrap_or(false)
        })
}
