//! # Configuration
//!
//! Environment-driven bot configuration.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Token, client id, guild id, command prefix and log level

use anyhow::Result;

use super::error::BotError;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_client_id: u64,
    /// Guild that slash commands are published into
    pub discord_guild_id: u64,
    pub command_prefix: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse configuration from an arbitrary key lookup
    ///
    /// All problems are collected and reported together rather than
    /// stopping at the first one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();

        let discord_token = required(&lookup, "DISCORD_TOKEN", &mut problems).unwrap_or_default();
        let discord_client_id = required(&lookup, "DISCORD_CLIENT_ID", &mut problems)
            .and_then(|raw| parse_id("DISCORD_CLIENT_ID", &raw, &mut problems))
            .unwrap_or_default();
        let discord_guild_id = required(&lookup, "DISCORD_GUILD_ID", &mut problems)
            .and_then(|raw| parse_id("DISCORD_GUILD_ID", &raw, &mut problems))
            .unwrap_or_default();

        let command_prefix = lookup("COMMAND_PREFIX")
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        if command_prefix.is_empty() || command_prefix.chars().any(char::is_whitespace) {
            problems.push(format!(
                "COMMAND_PREFIX must be non-empty and contain no whitespace (got '{command_prefix}')"
            ));
        }

        let log_level = lookup("LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        if !problems.is_empty() {
            return Err(BotError::InvalidEnvironment(problems).into());
        }

        Ok(Config {
            discord_token,
            discord_client_id,
            discord_guild_id,
            command_prefix,
            log_level,
        })
    }
}

fn required<F>(lookup: &F, key: &str, problems: &mut Vec<String>) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => {
            problems.push(format!("{key} is not set"));
            None
        }
    }
}

fn parse_id(key: &str, raw: &str, problems: &mut Vec<String>) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => {
            problems.push(format!("{key} is not a valid id: '{raw}'"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_parses_required_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DISCORD_CLIENT_ID", "1234"),
            ("DISCORD_GUILD_ID", "5678"),
        ]))
        .unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.discord_client_id, 1234);
        assert_eq!(config.discord_guild_id, 5678);
        assert_eq!(config.command_prefix, DEFAULT_PREFIX);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_config_honours_optional_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DISCORD_CLIENT_ID", "1"),
            ("DISCORD_GUILD_ID", "2"),
            ("COMMAND_PREFIX", "?"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_reports_all_problems_at_once() {
        let err = Config::from_lookup(lookup_from(&[("DISCORD_CLIENT_ID", "not-a-number")]))
            .unwrap_err();

        match err.downcast_ref::<BotError>() {
            Some(BotError::InvalidEnvironment(problems)) => {
                assert_eq!(problems.len(), 3);
                assert!(problems.iter().any(|p| p.contains("DISCORD_TOKEN")));
                assert!(problems.iter().any(|p| p.contains("DISCORD_CLIENT_ID")));
                assert!(problems.iter().any(|p| p.contains("DISCORD_GUILD_ID")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_whitespace_prefix() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DISCORD_CLIENT_ID", "1"),
            ("DISCORD_GUILD_ID", "2"),
            ("COMMAND_PREFIX", "a b"),
        ]));
        assert!(result.is_err());
    }
}
