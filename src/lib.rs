pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonSink, TextSink};
pub use core::runner::{DemoRunner, RunOptions, RunSummary};
pub use domain::model::{DemoReport, Principle, Section};
pub use utils::error::{DemoError, Result};
