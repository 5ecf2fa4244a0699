use thiserror::Error;

/// Raised by a naive design that cannot honour the contract it claims.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefuelError {
    #[error("Can't fuel an electric car with gasoline")]
    ElectricCar,
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown principle: {name}")]
    UnknownPrinciple { name: String },

    #[error("Violation failed at runtime: {0}")]
    ViolationFailure(#[from] RefuelError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
    Demonstration,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::ConfigError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::UnknownPrinciple { .. } => ErrorCategory::Configuration,
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorCategory::Output,
            DemoError::ViolationFailure(_) => ErrorCategory::Demonstration,
        }
    }

    /// Violation failures are absorbed by the runner, so only
    /// configuration and output problems reach the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Output | ErrorCategory::Demonstration => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write demonstration output: {}", e),
            DemoError::SerializationError(e) => format!("Could not encode report as JSON: {}", e),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DemoError::UnknownPrinciple { name } => {
                format!("'{}' is not one of the SOLID principles", name)
            }
            DemoError::ViolationFailure(e) => format!("A naive design failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the config file and flags; valid principles are srp, ocp, lsp, isp, dip"
            }
            ErrorCategory::Output => "Check that the output path is writable",
            ErrorCategory::Demonstration => "Run without --violations to see only the solutions",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let config = DemoError::UnknownPrinciple {
            name: "xyz".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let io = DemoError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.category(), ErrorCategory::Output);
        assert_eq!(io.exit_code(), 2);
    }

    #[test]
    fn test_violation_failure_converts_from_refuel_error() {
        let err = DemoError::from(RefuelError::ElectricCar);
        assert_eq!(err.category(), ErrorCategory::Demonstration);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Can't fuel an electric car"));
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let err = DemoError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert!(err.user_friendly_message().contains("output.format"));
        assert!(err.to_string().contains("xml"));
    }
}
