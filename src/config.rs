use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

const DEFAULT_PORT: u16 = 9090;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Process configuration, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub address: SocketAddr,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = match std::env::var("HOST") {
            Ok(host) => host
                .parse::<IpAddr>()
                .with_context(|| format!("HOST is not an IP address: {host}"))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = parse_or("PORT", DEFAULT_PORT)?;
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        Ok(Self {
            database_url,
            address: SocketAddr::new(host, port),
            max_connections,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> crate::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} has an invalid value: {value}")),
        Err(_) => Ok(default),
    }
}
