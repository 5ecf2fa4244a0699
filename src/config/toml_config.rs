use crate::core::Principle;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub run: RunSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunSection {
    pub principles: Option<Vec<String>>,
    pub include_violations: Option<bool>,
    pub include_theory: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn principles(&self) -> Result<Vec<Principle>> {
        self.run
            .principles
            .iter()
            .flatten()
            .map(|name| name.parse())
            .collect()
    }

    pub fn include_violations(&self) -> bool {
        self.run.include_violations.unwrap_or(false)
    }

    pub fn include_theory(&self) -> bool {
        self.run.include_theory.unwrap_or(false)
    }

    pub fn format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        for name in self.run.principles.iter().flatten() {
            validate_non_empty_string("run.principles", name)?;
        }
        self.principles()?;

        validate_one_of("output.format", self.format(), &OUTPUT_FORMATS)?;

        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }

        Ok(())
    }
}
