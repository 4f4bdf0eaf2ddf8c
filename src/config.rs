//! Run configuration read from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `PUYO_SEED` | u64 seed of the color source | random |
//! | `PUYO_LOG_PATH` | file to write logs to | none (logging off) |
//! | `PUYO_LOG` | `tracing` filter directives | `info` |

use std::path::PathBuf;

pub const SEED_VAR: &str = "PUYO_SEED";
pub const LOG_PATH_VAR: &str = "PUYO_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "PUYO_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; `lookup` returns `None` for unset names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            log_path,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn reads_every_variable() {
        let config = RunConfig::from_lookup(lookup(&[
            (SEED_VAR, " 42 "),
            (LOG_PATH_VAR, "/tmp/puyo.log"),
            (LOG_FILTER_VAR, "tui_puyo_core=debug"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/puyo.log")));
        assert_eq!(config.log_filter, "tui_puyo_core=debug");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = RunConfig::from_lookup(lookup(&[
            (SEED_VAR, "not-a-number"),
            (LOG_PATH_VAR, "  "),
            (LOG_FILTER_VAR, ""),
        ]));
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unset_environment_uses_defaults() {
        let config = RunConfig::from_lookup(|_| None);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_filter, "info");
    }
}
