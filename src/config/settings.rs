use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::error::ConfigError;
use crate::topics::{ScaleBounds, WeightCalculator, WeightFormula};

const CONFIG_FILE: &str = "studyplan.toml";
const APP_DIR: &str = "studyplan";

/// Tunables for weighting and rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorSettings {
    /// Smallest slice of time handed out, in minutes
    pub granularity_minutes: u32,
    pub weight: WeightFormula,
    pub difficulty_scale: ScaleBounds,
    pub priority_scale: ScaleBounds,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        AllocatorSettings {
            granularity_minutes: 15,
            weight: WeightFormula::default(),
            difficulty_scale: ScaleBounds::default(),
            priority_scale: ScaleBounds::default(),
        }
    }
}

impl AllocatorSettings {
    pub fn calculator(&self) -> WeightCalculator {
        WeightCalculator::new(self.weight, self.difficulty_scale, self.priority_scale)
    }
}

/// Narrative summary backend (Ollama) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySettings {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Consecutive failures before the backend is skipped
    pub failure_threshold: u32,
    pub cooldown_secs: u64,
    /// Also ask for a short note per study day
    pub per_day: bool,
}

impl Default for SummarySettings {
    fn default() -> Self {
        SummarySettings {
            enabled: false,
            base_url: "http://localhost:11434".to_string(),
            model: "qwen2.5:7b-instruct".to_string(),
            timeout_secs: 20,
            failure_threshold: 2,
            cooldown_secs: 60,
            per_day: true,
        }
    }
}

impl SummarySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub allocator: AllocatorSettings,
    pub summary: SummarySettings,
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.allocator;
        if a.granularity_minutes == 0 {
            return Err(ConfigError::Invalid("allocator.granularity_minutes must be positive".into()));
        }
        for (name, scale) in [("difficulty_scale", a.difficulty_scale), ("priority_scale", a.priority_scale)] {
            if scale.min > scale.max {
                return Err(ConfigError::Invalid(format!(
                    "allocator.{}: min {} is greater than max {}",
                    name, scale.min, scale.max
                )));
            }
        }
        if self.summary.timeout_secs == 0 {
            return Err(ConfigError::Invalid("summary.timeout_secs must be positive".into()));
        }
        if self.summary.failure_threshold == 0 {
            return Err(ConfigError::Invalid("summary.failure_threshold must be positive".into()));
        }
        Ok(())
    }
}

/// Location of `studyplan.toml`: `$STUDYPLAN_CONFIG`, else the platform data directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("STUDYPLAN_CONFIG") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support");
            dir.push(APP_DIR);
            dir.push(CONFIG_FILE);
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push(APP_DIR);
            dir.push(CONFIG_FILE);
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share");
            dir.push(APP_DIR);
            dir.push(CONFIG_FILE);
            return dir;
        }
    }

    // Fallback
    PathBuf::from(CONFIG_FILE)
}

/// Read and validate a config file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<PlannerConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "No config file, using defaults");
            return Ok(PlannerConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    let config: PlannerConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    config.validate()?;

    tracing::info!(path = ?path, "Loaded planner config");
    Ok(config)
}

/// Load the config, falling back to defaults (with a warning) when it is unusable.
pub fn load_config(path: Option<&Path>) -> PlannerConfig {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Config unusable, using defaults");
            PlannerConfig::default()
        }
    }
}
