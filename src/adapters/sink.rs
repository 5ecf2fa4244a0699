use crate::core::{DemoReport, ReportSink, Result, Section};
use std::io::Write;

/// Human-readable console rendering.
pub struct TextSink<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, emitted: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_section(&mut self, name: &str, section: &Section) -> Result<()> {
        writeln!(self.writer, "-- {} --", name)?;
        for line in &section.lines {
            writeln!(self.writer, "{}", line)?;
        }
        if let Some(failure) = &section.failure {
            writeln!(self.writer, "!! runtime failure: {}", failure)?;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn emit(&mut self, report: &DemoReport) -> Result<()> {
        if self.emitted > 0 {
            writeln!(self.writer)?;
        }
        writeln!(
            self.writer,
            "== {}: {} ==",
            report.principle.code(),
            report.title
        )?;
        if let Some(theory) = &report.theory {
            writeln!(self.writer, "{}", theory)?;
        }
        if let Some(violation) = &report.violation {
            self.write_section("violation", violation)?;
        }
        self.write_section("solution", &report.solution)?;
        self.emitted += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON object per line.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, report: &DemoReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Principle;
    use chrono::Utc;

    fn sample_report() -> DemoReport {
        DemoReport {
            principle: Principle::Lsp,
            title: Principle::Lsp.title().to_string(),
            theory: None,
            violation: Some(Section {
                lines: vec!["Refuel".to_string()],
                failure: Some("Can't fuel an electric car with gasoline".to_string()),
            }),
            solution: Section {
                lines: vec!["Refuel with gasoline".to_string()],
                failure: None,
            },
            started_at: Utc::now(),
        }
    }

    #[test]
    fn test_text_sink_layout() {
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&sample_report()).unwrap();
        sink.finish().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert_eq!(
            text,
            "== LSP: Liskov Substitution Principle ==\n\
             -- violation --\n\
             Refuel\n\
             !! runtime failure: Can't fuel an electric car with gasoline\n\
             -- solution --\n\
             Refuel with gasoline\n"
        );
    }

    #[test]
    fn test_text_sink_separates_reports() {
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&sample_report()).unwrap();
        sink.emit(&sample_report()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("Refuel with gasoline\n\n== LSP"));
    }

    #[test]
    fn test_json_sink_writes_one_object_per_line() {
        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&sample_report()).unwrap();
        sink.emit(&sample_report()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["principle"], "lsp");
        assert_eq!(value["solution"]["lines"][0], "Refuel with gasoline");
        assert!(value.get("theory").is_none());
    }
}
