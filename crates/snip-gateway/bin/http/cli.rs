use clap::{Parser, ValueEnum};
use snip_core::shortcode::DEFAULT_CODE_LENGTH;
use snip_shortener::DEFAULT_MAX_ATTEMPTS;
use snip_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNIP_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "SNIP_GATEWAY_PUBLIC_BASE_URL";
pub const CODE_LENGTH_ENV: &str = "SNIP_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SNIP_MAX_ATTEMPTS";
pub const GENERATOR_ENV: &str = "SNIP_GENERATOR";
pub const GENERATOR_PREFIX_ENV: &str = "SNIP_GENERATOR_PREFIX";
pub const LOG_FORMAT_ENV: &str = "SNIP_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "sequential")]
    Sequential,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix of every short URL handed out, e.g. `https://sn.ip`.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,

    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    /// Only used by the sequential generator.
    #[arg(long, env = GENERATOR_PREFIX_ENV, default_value = "")]
    pub generator_prefix: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_flags() {
        let cli = CLI::try_parse_from([
            "snip-gateway",
            "--listen-addr",
            "0.0.0.0:9000",
            "--public-base-url",
            "https://sn.ip",
            "--code-length",
            "10",
            "--max-attempts",
            "3",
            "--generator",
            "sequential",
            "--generator-prefix",
            "dev",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.public_base_url, "https://sn.ip");
        assert_eq!(cli.code_length, 10);
        assert_eq!(cli.max_attempts, 3);
        assert_eq!(cli.generator, GeneratorArg::Sequential);
        assert_eq!(cli.generator_prefix, "dev");
        assert_eq!(cli.log_format, LogFormatArg::Json);
    }

    #[test]
    fn rejects_unknown_generator() {
        assert!(CLI::try_parse_from(["snip-gateway", "--generator", "uuid"]).is_err());
    }
}
