pub mod registry;
pub mod runner;

pub use crate::domain::model::{DemoReport, Principle, Section};
pub use crate::domain::ports::{Demonstration, ReportSink};
pub use crate::utils::error::Result;
