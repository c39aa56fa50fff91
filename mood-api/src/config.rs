//! mood-api server configuration
//!
//! [`ServerConfig`] is built once at startup from the TOML bootstrap file
//! and command-line/environment overrides, then handed to
//! [`crate::server::run`]. Nothing reads configuration after that.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use mood_common::config::{CorsConfig, TomlConfig};
use mood_common::{Error, MoodPolicy, Result};

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cors: CorsConfig,
    pub policy: MoodPolicy,
    pub scoring_timeout: Option<Duration>,
    pub log_level: String,
}

/// Command-line configuration overrides
///
/// Environment variables are folded in by clap before these reach us.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Apply `overrides` on top of `toml` and validate the result
    pub fn resolve(toml: TomlConfig, overrides: ConfigOverrides) -> Result<Self> {
        toml.validate()?;

        let host = overrides.host.unwrap_or(toml.host);
        let port = overrides.port.unwrap_or(toml.port);

        Ok(Self {
            bind_addr: parse_bind_addr(&host, port)?,
            cors: toml.cors,
            policy: toml.classifier,
            scoring_timeout: toml.scoring_timeout_ms.map(Duration::from_millis),
            log_level: toml.logging.level.to_lowercase(),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        let toml = TomlConfig::default();
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], toml.port)),
            cors: toml.cors,
            policy: toml.classifier,
            scoring_timeout: None,
            log_level: toml.logging.level,
        }
    }
}

fn parse_bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = if host.eq_ignore_ascii_case("localhost") {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
        host.parse()
            .map_err(|_| Error::Config(format!("host must be an IP address, got {:?}", host)))?
    };

    Ok(SocketAddr::new(ip, port))
}
