use crate::error::{Result, SpamError};
use crate::features::CombineMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory of spam message files, or a single mbox file
    #[serde(default = "default_spam_path")]
    pub spam_path: String,
    /// Directory of ham message files, or a single mbox file
    #[serde(default = "default_ham_path")]
    pub ham_path: String,
    /// Per-source cap on loaded messages, 0 for all
    #[serde(default)]
    pub max_emails: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VocabularyConfig {
    /// Keep words whose count is strictly greater than this
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    /// Max words per side, 0 for unlimited
    #[serde(default)]
    pub maximum: usize,
    /// How spam and ham word lists are combined ("spam only", "spam-ham", "symmetric difference")
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Count each word once per message (document frequency)
    #[serde(default = "default_true")]
    pub deduplicate: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitConfig {
    #[serde(default = "default_train_fraction")]
    pub train: f64,
    #[serde(default = "default_cv_fraction")]
    pub cv: f64,
    /// Fixed seed for reproducible partitions
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_spam_path() -> String {
    "data/spam".to_string()
}

fn default_ham_path() -> String {
    "data/ham".to_string()
}

fn default_threshold() -> u32 {
    100
}

fn default_mode() -> String {
    CombineMode::SymmetricDifference.as_str().to_string()
}

fn default_true() -> bool {
    true
}

fn default_train_fraction() -> f64 {
    0.6
}

fn default_cv_fraction() -> f64 {
    0.2
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            spam_path: default_spam_path(),
            ham_path: default_ham_path(),
            max_emails: 0,
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            maximum: 0,
            mode: default_mode(),
            deduplicate: true,
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train: default_train_fraction(),
            cv: default_cv_fraction(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directives: `RUST_LOG` when set and non-empty, else the configured level
    pub fn directives(&self, rust_log: Option<&str>) -> String {
        match rust_log.map(str::trim) {
            Some(env) if !env.is_empty() => env.to_string(),
            _ => self.level.to_lowercase(),
        }
    }

    /// Subscriber filter honouring `RUST_LOG` over the configured level
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directives = self.directives(env.as_deref());
        EnvFilter::try_new(&directives).map_err(|e| {
            SpamError::Config(format!("Invalid log filter '{}': {}", directives, e))
        })
    }
}

impl VocabularyConfig {
    /// Parsed combination mode
    pub fn combine_mode(&self) -> Result<CombineMode> {
        self.mode.parse()
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.vocabulary.combine_mode()?;

        let split = &self.split;
        if !(0.0..=1.0).contains(&split.train) || !(0.0..=1.0).contains(&split.cv) {
            return Err(SpamError::Config(format!(
                "Split fractions must be within [0, 1], got train={} cv={}",
                split.train, split.cv
            )));
        }
        if split.train + split.cv > 1.0 {
            return Err(SpamError::Config(format!(
                "train + cv must not exceed 1.0, got {}",
                split.train + split.cv
            )));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(SpamError::Config(format!("Unknown log level: {}", other)));
            }
        }

        match self.logging.format.as_str() {
            "pretty" | "json" | "compact" => {}
            other => {
                return Err(SpamError::Config(format!("Unknown log format: {}", other)));
            }
        }

        Ok(())
    }
}
