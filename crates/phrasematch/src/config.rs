//! CLI configuration from arguments and environment
//!
//! Environment variables:
//! - `PHRASEMATCH_JSON`: emit one JSON object per input line (`1`/`true`)
//! - `PHRASEMATCH_STRICT`: reject reference sentences without usable words
//! - `RUST_LOG`: logging level (default: info)

use phrasematch_core::{EmptySentencePolicy, MatcherConfig};

use crate::error::{Error, Result};

/// Parsed CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Reference sentences; empty runs the built-in demonstration
    pub sentences: Vec<String>,
    pub json: bool,
    pub strict: bool,
    /// Print compile statistics to stderr
    pub stats: bool,
}

impl CliConfig {
    /// Build from process arguments (without the program name) and the process environment
    pub fn from_env<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        Self::parse(args, |key| std::env::var(key).ok())
    }

    /// Build from `args`, resolving environment variables through `env`
    pub fn parse<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            json: env("PHRASEMATCH_JSON").and_then(|v| parse_flag(&v)).unwrap_or(false),
            strict: env("PHRASEMATCH_STRICT").and_then(|v| parse_flag(&v)).unwrap_or(false),
            ..Default::default()
        };

        let mut flags_done = false;
        for arg in args {
            if flags_done || !arg.starts_with("--") {
                config.sentences.push(arg);
                continue;
            }
            match arg.as_str() {
                "--" => flags_done = true,
                "--json" => config.json = true,
                "--strict" => config.strict = true,
                "--stats" => config.stats = true,
                other => return Err(Error::Config(format!("unknown flag: {other}"))),
            }
        }

        Ok(config)
    }

    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig {
            empty_sentences: if self.strict {
                EmptySentencePolicy::Reject
            } else {
                EmptySentencePolicy::Drop
            },
            ..Default::default()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_flags_and_sentences() {
        let argv = args(&["--json", "I love trees", "--stats", "banana"]);
        let config = CliConfig::parse(argv, no_env).unwrap();
        assert_eq!(config.sentences, vec!["I love trees", "banana"]);
        assert!(config.json);
        assert!(config.stats);
        assert!(!config.strict);
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let config = CliConfig::parse(args(&["--", "--json"]), no_env).unwrap();
        assert_eq!(config.sentences, vec!["--json"]);
        assert!(!config.json);
    }

    #[test]
    fn test_unknown_flag() {
        let err = CliConfig::parse(args(&["--fast"]), no_env).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: unknown flag: --fast");
    }

    #[test]
    fn test_environment() {
        let env = |key: &str| match key {
            "PHRASEMATCH_STRICT" => Some("TRUE".to_string()),
            "PHRASEMATCH_JSON" => Some("maybe".to_string()),
            _ => None,
        };
        let config = CliConfig::parse(Vec::new(), env).unwrap();
        assert!(config.strict);
        assert!(!config.json);
        assert_eq!(
            config.matcher_config().empty_sentences,
            EmptySentencePolicy::Reject
        );
    }
}
