use crate::core::utils::identifiers::ChainCheck;
use thiserror::Error;

/// ddG magnitudes at or below this value are treated as zero.
pub const DEFAULT_ZERO_THRESHOLD: f64 = 1e-5;
pub const DEFAULT_BACKGROUND: &str = "1.0,1.0,1.0";
pub const DEFAULT_NEUTRAL_COLOUR: &str = "dim grey";
pub const DEFAULT_DDG_MODEL: u32 = 0;
pub const DEFAULT_SD_MODEL: u32 = 1;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColourConfig {
    pub zero_threshold: f64,
    pub background: String,
    pub neutral_colour: String,
    pub ddg_model: u32,
    pub sd_model: u32,
    pub chain_check: ChainCheck,
}

impl Default for ColourConfig {
    fn default() -> Self {
        Self {
            zero_threshold: DEFAULT_ZERO_THRESHOLD,
            background: DEFAULT_BACKGROUND.to_string(),
            neutral_colour: DEFAULT_NEUTRAL_COLOUR.to_string(),
            ddg_model: DEFAULT_DDG_MODEL,
            sd_model: DEFAULT_SD_MODEL,
            chain_check: ChainCheck::default(),
        }
    }
}

#[derive(Default)]
pub struct ColourConfigBuilder {
    zero_threshold: Option<f64>,
    background: Option<String>,
    neutral_colour: Option<String>,
    ddg_model: Option<u32>,
    sd_model: Option<u32>,
    chain_check: Option<ChainCheck>,
}

impl ColourConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zero_threshold(mut self, threshold: f64) -> Self {
        self.zero_threshold = Some(threshold);
        self
    }

    pub fn background(mut self, colour: impl Into<String>) -> Self {
        self.background = Some(colour.into());
        self
    }

    pub fn neutral_colour(mut self, colour: impl Into<String>) -> Self {
        self.neutral_colour = Some(colour.into());
        self
    }

    pub fn ddg_model(mut self, model: u32) -> Self {
        self.ddg_model = Some(model);
        self
    }

    pub fn sd_model(mut self, model: u32) -> Self {
        self.sd_model = Some(model);
        self
    }

    pub fn chain_check(mut self, check: ChainCheck) -> Self {
        self.chain_check = Some(check);
        self
    }

    pub fn build(self) -> Result<ColourConfig, ConfigError> {
        let defaults = ColourConfig::default();
        let config = ColourConfig {
            zero_threshold: self.zero_threshold.unwrap_or(defaults.zero_threshold),
            background: self.background.unwrap_or(defaults.background),
            neutral_colour: self.neutral_colour.unwrap_or(defaults.neutral_colour),
            ddg_model: self.ddg_model.unwrap_or(defaults.ddg_model),
            sd_model: self.sd_model.unwrap_or(defaults.sd_model),
            chain_check: self.chain_check.unwrap_or(defaults.chain_check),
        };

        if !config.zero_threshold.is_finite() || config.zero_threshold < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "zero-threshold",
                reason: format!("must be a non-negative number, got {}", config.zero_threshold),
            });
        }
        if config.ddg_model == config.sd_model {
            return Err(ConfigError::InvalidParameter {
                name: "sd-model",
                reason: format!("must differ from the ddG model (#{})", config.ddg_model),
            });
        }
        if config.background.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "background",
                reason: "cannot be empty".to_string(),
            });
        }
        if config.neutral_colour.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "neutral-colour",
                reason: "cannot be empty".to_string(),
            });
        }
        Ok(config)
    }
}
