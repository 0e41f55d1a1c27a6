use std::net::SocketAddr;

use clap::Parser;
use color_eyre::Result;

/// Trivia REST API
#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct Config {
    /// Database connection string
    #[arg(long, env, default_value = "sqlite://trivia.db")]
    pub database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    pub address: String,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(short, long, env, default_value = "debug")]
    pub log_level: String,
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.address.parse::<SocketAddr>()?)
    }

    /// Tracing filter directives for when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> String {
        format!("trivia_api={},tower_http=info", self.log_level)
    }
}
