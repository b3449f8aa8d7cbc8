//! Command-line and environment configuration.
//!
//! Only the process is configured here: where to listen and how to log. The
//! endpoints themselves take no configuration.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

/// Server configuration.
#[derive(Clone, Debug, Parser)]
#[command(name = "reqread", version, about = "Request body and parameter reading endpoints")]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "REQREAD_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Log output format. The filter itself comes from `RUST_LOG`.
    #[arg(long, env = "REQREAD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["reqread"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::try_parse_from(["reqread", "--bind", "0.0.0.0:3000", "--log-format", "json"])
                .unwrap();
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_address_is_rejected() {
        assert!(Config::try_parse_from(["reqread", "--bind", "nowhere"]).is_err());
    }
}
