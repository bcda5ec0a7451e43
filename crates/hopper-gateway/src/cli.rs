use clap::{Parser, ValueEnum};
use hopper_redirector::cache::DEFAULT_CACHE_CAPACITY;
use hopper_redirector::CacheConfig;
use hopper_shortener::{ShortenerSettings, DEFAULT_MAX_ATTEMPTS};
use hopper_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "HOPPER_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "HOPPER_GATEWAY_PUBLIC_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "HOPPER_GATEWAY_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "HOPPER_GATEWAY_MYSQL_DSN";
pub const MAX_ATTEMPTS_ENV: &str = "HOPPER_GATEWAY_MAX_ATTEMPTS";
pub const CACHE_CAPACITY_ENV: &str = "HOPPER_GATEWAY_CACHE_CAPACITY";
pub const LOG_FORMAT_ENV: &str = "HOPPER_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hopper-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix for the `short_url` returned by `POST /shorten`.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Candidate codes tried per request before giving up.
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    /// Entries in the redirect cache; 0 turns the cache off.
    #[arg(long, env = CACHE_CAPACITY_ENV, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: u64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn shortener_settings(&self) -> ShortenerSettings {
        ShortenerSettings::builder()
            .max_attempts(self.max_attempts)
            .build()
    }

    pub fn cache_config(&self) -> Option<CacheConfig> {
        (self.cache_capacity > 0).then(|| {
            CacheConfig::builder()
                .max_capacity(self.cache_capacity)
                .build()
        })
    }
}
