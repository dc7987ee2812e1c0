use crate::checker::similarity::Metric;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const LOCAL_CONFIG_FILE: &str = ".ctxspell.toml";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Words on each side of the reviewed word kept for context.
    pub context_radius: usize,

    /// Upper bound on the candidates reported per unknown word.
    pub max_candidates: usize,

    pub metric: Metric,

    pub strip_trailing_period: bool,
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    context_radius: Option<usize>,
    max_candidates: Option<usize>,
    metric: Option<Metric>,
    strip_trailing_period: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_radius: 2,
            max_candidates: 10,
            metric: Metric::default(),
            strip_trailing_period: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: explicit file > local config > global config > defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = explicit {
            config = config.merge(Self::from_file(path)?);
        } else {
            // Load global config
            if let Some(global_path) = Self::global_config_path() {
                if global_path.exists() {
                    config = config.merge(Self::from_file(&global_path)?);
                }
            }

            // Load local config (overrides global)
            let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
            if local_path.exists() {
                config = config.merge(Self::from_file(&local_path)?);
            }
        }

        if config.max_candidates == 0 {
            warn!("max_candidates is 0, no substitutes will be offered");
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), ?file, "loaded config");
        Ok(file)
    }

    /// Apply every key the file sets, whatever its value.
    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(radius) = file.context_radius {
            self.context_radius = radius;
        }
        if let Some(max) = file.max_candidates {
            self.max_candidates = max;
        }
        if let Some(metric) = file.metric {
            self.metric = metric;
        }
        if let Some(strip) = file.strip_trailing_period {
            self.strip_trailing_period = strip;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ctxspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
