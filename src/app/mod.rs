// Application layer: wires a resolved config to a sink and an output target.

use crate::adapters::{JsonSink, TextSink};
use crate::config::ResolvedConfig;
use crate::core::registry;
use crate::core::runner::{DemoRunner, RunSummary};
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Opens the output file, creating parent directories, or falls back to stdout.
pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                fs::create_dir_all(parent)?;
            }
            tracing::info!("📁 Writing output to: {}", path);
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn run(resolved: &ResolvedConfig) -> Result<RunSummary> {
    let writer = open_output(resolved.output_path.as_deref())?;
    let options = resolved.options.clone();

    match resolved.format.as_str() {
        "json" => DemoRunner::new(JsonSink::new(writer), options).run(),
        _ => DemoRunner::new(TextSink::new(writer), options).run(),
    }
}

/// One `code  title` line per principle.
pub fn write_catalog(out: &mut dyn Write) -> Result<()> {
    for demo in registry::catalog() {
        let principle = demo.principle();
        writeln!(
            out,
            "{}  {}",
            principle.code().to_lowercase(),
            principle.title()
        )?;
    }
    out.flush()?;
    Ok(())
}
