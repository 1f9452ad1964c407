use crate::cli::ColourArgs;
use crate::error::{CliError, Result};
use alascan::core::utils::identifiers::ChainCheck;
use alascan::engine::config::{ColourConfig, ColourConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Colouring options as read from a TOML file; every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialColourConfig {
    pub zero_threshold: Option<f64>,
    pub background: Option<String>,
    pub neutral_colour: Option<String>,
    pub ddg_model: Option<u32>,
    pub sd_model: Option<u32>,
    pub strict_chain: Option<bool>,
}

impl PartialColourConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading colour configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the file values and validates
    /// the result. Values missing from both fall back to the built-in defaults.
    pub fn merge_with_cli(self, args: &ColourArgs) -> Result<ColourConfig> {
        let mut builder = ColourConfigBuilder::new();

        if let Some(threshold) = args.zero_threshold.or(self.zero_threshold) {
            builder = builder.zero_threshold(threshold);
        }
        if let Some(background) = self.background {
            builder = builder.background(background);
        }
        if let Some(colour) = self.neutral_colour {
            builder = builder.neutral_colour(colour);
        }
        if let Some(model) = self.ddg_model {
            builder = builder.ddg_model(model);
        }
        if let Some(model) = self.sd_model {
            builder = builder.sd_model(model);
        }
        if args.strict_chain || self.strict_chain.unwrap_or(false) {
            builder = builder.chain_check(ChainCheck::UppercaseOnly);
        }

        let config = builder.build()?;
        debug!("Final colour configuration: {:?}", config);
        Ok(config)
    }
}
