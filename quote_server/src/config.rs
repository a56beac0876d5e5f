//! Command-line and environment settings for the quote server.
//!
//! Every flag falls back to an environment variable, then to a default, so the
//! binary runs unconfigured in development and takes `PORT` from the platform
//! when deployed.
use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::error::ServerError;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3004;

/// Parsed server settings.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// IP address to listen on.
    #[clap(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on.
    #[clap(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Deployment environment name reported by `/status`.
    #[clap(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,
}

impl Settings {
    /// Socket address built from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self.host.trim().parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        Settings::try_parse_from(std::iter::once("quote_server").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn explicit_flags_build_the_bind_address() {
        let settings = parse(&["--host", "127.0.0.1", "--port", "8080", "--environment", "test"]);
        assert_eq!(settings.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(settings.environment, "test");
    }

    #[test]
    fn ipv6_hosts_are_accepted() {
        let settings = parse(&["--host", "::1", "--port", "9000"]);
        assert_eq!(settings.bind_addr().unwrap().to_string(), "[::1]:9000");
    }

    #[test]
    fn hostnames_are_rejected() {
        let settings = parse(&["--host", "localhost", "--port", "9000"]);
        assert!(matches!(settings.bind_addr(), Err(ServerError::InvalidHost(_))));
    }

    #[test]
    fn port_must_fit_u16() {
        let args = ["quote_server", "--port", "70000"];
        assert!(Settings::try_parse_from(args).is_err());
    }
}
