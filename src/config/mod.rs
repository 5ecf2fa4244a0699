pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

use crate::core::runner::RunOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::{TomlConfig, OUTPUT_FORMATS};

/// Flags layered over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub options: RunOptions,
    pub format: String,
    pub output_path: Option<String>,
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("format", &self.format, &OUTPUT_FORMATS)?;
        if let Some(path) = &self.output_path {
            validate_path("output", path)?;
        }
        Ok(())
    }
}
