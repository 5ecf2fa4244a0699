use crate::config::{ResolvedConfig, TomlConfig};
use crate::core::runner::RunOptions;
use crate::core::Principle;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-demos")]
#[command(about = "Violation and solution demonstrations of the SOLID principles")]
pub struct CliConfig {
    /// Principles to run, by code (srp) or name (single-responsibility); default all
    #[arg(short, long, value_delimiter = ',', value_parser = parse_principle)]
    pub principle: Vec<Principle>,

    /// Also run the violation half of each demonstration
    #[arg(long)]
    pub violations: bool,

    /// Print the theory paragraph before each demonstration
    #[arg(long)]
    pub theory: bool,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// List the available principles and exit
    #[arg(long)]
    pub list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_principle(name: &str) -> Result<Principle> {
    name.parse()
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let principles = if self.principle.is_empty() {
            file.principles()?
        } else {
            self.principle.clone()
        };

        let resolved = ResolvedConfig {
            options: RunOptions {
                principles,
                include_violations: self.violations || file.include_violations(),
                include_theory: self.theory || file.include_theory(),
            },
            format: self
                .format
                .clone()
                .unwrap_or_else(|| file.format().to_string()),
            output_path: self
                .output
                .clone()
                .or_else(|| file.output_path().map(str::to_string)),
        };
        resolved.validate()?;
        Ok(resolved)
    }
}
