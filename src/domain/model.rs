use crate::utils::error::DemoError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Principle::Srp => "SRP",
            Principle::Ocp => "OCP",
            Principle::Lsp => "LSP",
            Principle::Isp => "ISP",
            Principle::Dip => "DIP",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility Principle",
            Principle::Ocp => "Open/Closed Principle",
            Principle::Lsp => "Liskov Substitution Principle",
            Principle::Isp => "Interface Segregation Principle",
            Principle::Dip => "Dependency Inversion Principle",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Principle {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srp" | "single-responsibility" => Ok(Principle::Srp),
            "ocp" | "open-closed" => Ok(Principle::Ocp),
            "lsp" | "liskov-substitution" => Ok(Principle::Lsp),
            "isp" | "interface-segregation" => Ok(Principle::Isp),
            "dip" | "dependency-inversion" => Ok(Principle::Dip),
            _ => Err(DemoError::UnknownPrinciple {
                name: s.to_string(),
            }),
        }
    }
}

/// Printed lines of one half of a demonstration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl Section {
    pub fn from_output(output: &[u8]) -> Self {
        Self {
            lines: String::from_utf8_lossy(output)
                .lines()
                .map(str::to_string)
                .collect(),
            failure: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub principle: Principle,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Section>,
    pub solution: Section,
    pub started_at: DateTime<Utc>,
}
