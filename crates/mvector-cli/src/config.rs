use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of the `random` subcommand.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RandomConfig {
    pub version: String,
    pub len: usize,
    pub min: f64,
    pub max: f64,
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig {
            version: clap::crate_version!().to_string(),
            len: 3,
            min: -1.0,
            max: 1.0,
            seed: None,
        }
    }
}

impl RandomConfig {
    /// Reads the fields present in `content`, keeping the default (with a
    /// warning) for every field that is missing or has the wrong type.
    pub fn from_json(content: &str) -> Result<Self> {
        let partial: serde_json::Value =
            serde_json::from_str(content).context("Config is not valid JSON")?;
        let mut config = RandomConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(version);
        load_or_default!(len);
        load_or_default!(min);
        load_or_default!(max);
        load_or_default!(seed);

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))
    }

    /// Builds the config from the optional positional config file, then
    /// applies `--len`, `--min`, `--max` and `--seed` overrides.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<std::path::PathBuf>("config") {
            Some(path) => Self::from_file(path)?,
            None => RandomConfig::default(),
        };

        if let Some(len) = matches.get_one::<usize>("len") {
            config.len = *len;
        }
        if let Some(min) = matches.get_one::<f64>("min") {
            config.min = *min;
        }
        if let Some(max) = matches.get_one::<f64>("max") {
            config.max = *max;
        }
        if let Some(seed) = matches.get_one::<u64>("seed") {
            config.seed = Some(*seed);
        }

        Ok(config)
    }
}
