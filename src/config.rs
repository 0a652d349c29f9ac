use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.csv";
pub const DEFAULT_LOG_FILTER: &str = "meal_planner=info";

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub catalog_path: PathBuf,
    /// Fixes the selection randomness when set.
    pub seed: Option<u64>,
    pub log_filter: String,
    pub json_logs: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json_logs: false,
        }
    }
}

impl PlannerConfig {
    /// Reads `MEAL_PLANNER_CATALOG`, `MEAL_PLANNER_SEED`, `RUST_LOG` and `LOG_FORMAT`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let seed = match lookup("MEAL_PLANNER_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!(
                    "MEAL_PLANNER_SEED must be an unsigned integer, got '{}': {}",
                    raw,
                    e
                )
            })?),
            None => None,
        };

        Ok(Self {
            catalog_path: lookup("MEAL_PLANNER_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            seed,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            json_logs: lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<PlannerConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlannerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_empty() -> anyhow::Result<()> {
        assert_eq!(config_from(&[])?, PlannerConfig::default());
        Ok(())
    }

    #[test]
    fn test_reads_all_keys() -> anyhow::Result<()> {
        let config = config_from(&[
            ("MEAL_PLANNER_CATALOG", "/tmp/meals.json"),
            ("MEAL_PLANNER_SEED", " 42 "),
            ("RUST_LOG", "meal_planner=debug"),
            ("LOG_FORMAT", "json"),
        ])?;
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/meals.json"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter, "meal_planner=debug");
        assert!(config.json_logs);
        Ok(())
    }

    #[test]
    fn test_bad_seed_is_an_error() {
        let err = config_from(&[("MEAL_PLANNER_SEED", "abc")]).unwrap_err();
        assert!(err.to_string().contains("MEAL_PLANNER_SEED"));
    }
}
