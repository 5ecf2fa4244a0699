use crate::domain::model::{DemoReport, Principle};
use crate::utils::error::Result;
use std::io::Write;

/// A violation/solution pair for one principle.
///
/// Both halves print to `out` exactly what the snippet would print to the
/// console.
pub trait Demonstration {
    fn principle(&self) -> Principle;

    fn theory(&self) -> &'static str;

    fn run_violation(&self, out: &mut dyn Write) -> Result<()>;

    fn run_solution(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait ReportSink {
    fn emit(&mut self, report: &DemoReport) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
