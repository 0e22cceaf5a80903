//! Startup configuration.

use std::fmt;

use clap::Parser;
use thiserror::Error;

/// Command line arguments. Every flag can also be set from the environment.
#[derive(Parser)]
#[command(name = "dipswitch-bot", version, about = "Telegram bot that draws DIP switch settings")]
pub struct Args {
    /// Telegram bot access token.
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Tracing filter directives, e.g. `info` or `dipswitch_core=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No token in `--token` or `TOKEN`.
    #[error("bot access token is missing (set TOKEN or pass --token)")]
    MissingToken,
}

/// Validated configuration.
#[derive(Clone)]
pub struct Config {
    /// Telegram bot access token.
    pub token: String,
    /// Tracing filter directives.
    pub log_filter: String,
}

impl Config {
    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `MissingToken` if the token is absent or blank.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let token = args
            .token
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self { token, log_filter: args.log_filter })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(token: Option<&str>) -> Args {
        Args { token: token.map(str::to_owned), log_filter: "info".into() }
    }

    #[test]
    fn token_is_required() {
        assert!(matches!(Config::from_args(args(None)), Err(ConfigError::MissingToken)));
        assert!(matches!(Config::from_args(args(Some("  "))), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn token_is_trimmed() {
        let config = Config::from_args(args(Some(" 123:abc\n"))).unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn debug_hides_token() {
        let config = Config::from_args(args(Some("123:secret"))).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn cli_flags_parse() {
        let args =
            Args::try_parse_from(["dipswitch-bot", "--token", "1:x", "--log-filter", "debug"]).unwrap();
        assert_eq!(args.token.as_deref(), Some("1:x"));
        assert_eq!(args.log_filter, "debug");
    }
}
