use crate::core::registry;
use crate::core::{DemoReport, Demonstration, Principle, ReportSink, Result, Section};
use crate::utils::error::{DemoError, ErrorCategory};
use crate::utils::monitor::RunMonitor;
use chrono::Utc;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub principles: Vec<Principle>,
    pub include_violations: bool,
    pub include_theory: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub demonstrations: usize,
    pub failed_violations: usize,
    pub elapsed: Duration,
}

pub struct DemoRunner<S: ReportSink> {
    sink: S,
    options: RunOptions,
}

impl<S: ReportSink> DemoRunner<S> {
    pub fn new(sink: S, options: RunOptions) -> Self {
        Self { sink, options }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let demos = registry::select(&self.options.principles);
        tracing::info!("Running {} demonstration(s)", demos.len());

        let mut monitor = RunMonitor::new();
        let mut failed_violations = 0;

        for demo in &demos {
            monitor.start_lap();
            let report = self.run_one(demo.as_ref())?;
            if report
                .violation
                .as_ref()
                .is_some_and(|v| v.failure.is_some())
            {
                failed_violations += 1;
            }
            self.sink.emit(&report)?;
            monitor.finish_lap(demo.principle().code());
        }

        self.sink.finish()?;

        let summary = RunSummary {
            demonstrations: demos.len(),
            failed_violations,
            elapsed: monitor.elapsed(),
        };
        tracing::info!(
            "Finished {} demonstration(s) in {:?}",
            summary.demonstrations,
            summary.elapsed
        );
        Ok(summary)
    }

    fn run_one(&self, demo: &dyn Demonstration) -> Result<DemoReport> {
        let principle = demo.principle();
        let started_at = Utc::now();
        tracing::debug!("Starting {}", principle.title());

        let violation = if self.options.include_violations {
            Some(capture_violation(demo)?)
        } else {
            None
        };

        let mut output = Vec::new();
        demo.run_solution(&mut output)?;

        Ok(DemoReport {
            principle,
            title: principle.title().to_string(),
            theory: self
                .options
                .include_theory
                .then(|| demo.theory().to_string()),
            violation,
            solution: Section::from_output(&output),
            started_at,
        })
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Runs the naive half. A failure of the design itself is part of the
/// lesson and is kept in the section; anything else aborts.
fn capture_violation(demo: &dyn Demonstration) -> Result<Section> {
    let mut output = Vec::new();
    match demo.run_violation(&mut output) {
        Ok(()) => Ok(Section::from_output(&output)),
        Err(e) if e.category() == ErrorCategory::Demonstration => {
            tracing::warn!("⚠️  {} violation failed at runtime: {}", demo.principle(), e);
            let mut section = Section::from_output(&output);
            section.failure = Some(match e {
                DemoError::ViolationFailure(inner) => inner.to_string(),
                other => other.to_string(),
            });
            Ok(section)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CollectingSink {
        reports: Vec<DemoReport>,
        finished: bool,
    }

    impl ReportSink for CollectingSink {
        fn emit(&mut self, report: &DemoReport) -> Result<()> {
            self.reports.push(report.clone());
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn test_solutions_only_by_default() {
        let mut runner = DemoRunner::new(CollectingSink::default(), RunOptions::default());
        let summary = runner.run().unwrap();
        let sink = runner.into_sink();

        assert_eq!(summary.demonstrations, 5);
        assert_eq!(summary.failed_violations, 0);
        assert!(sink.finished);
        assert!(sink.reports.iter().all(|r| r.violation.is_none()));
        assert!(sink.reports.iter().all(|r| r.theory.is_none()));
    }

    #[test]
    fn test_lsp_violation_failure_is_recorded() {
        let options = RunOptions {
            principles: vec![Principle::Lsp],
            include_violations: true,
            include_theory: true,
        };
        let mut runner = DemoRunner::new(CollectingSink::default(), options);
        let summary = runner.run().unwrap();
        let sink = runner.into_sink();

        assert_eq!(summary.failed_violations, 1);
        let report = &sink.reports[0];
        let violation = report.violation.as_ref().unwrap();
        assert_eq!(
            violation.failure.as_deref(),
            Some("Can't fuel an electric car with gasoline")
        );
        assert_eq!(violation.lines, vec!["Drive", "Refuel", "Drive"]);
        assert!(report.theory.is_some());
    }

    struct FailingSink;

    impl ReportSink for FailingSink {
        fn emit(&mut self, _report: &DemoReport) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    #[test]
    fn test_sink_failure_aborts_run() {
        let mut runner = DemoRunner::new(FailingSink, RunOptions::default());
        let err = runner.run().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Output);
    }
}
