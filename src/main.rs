use clap::Parser;
use solid_demos::utils::logger;
use solid_demos::{app, CliConfig, DemoError};
use std::io;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if config.list {
        if let Err(e) = app::write_catalog(&mut io::stdout().lock()) {
            exit_with(&e);
        }
        return;
    }

    let resolved = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => exit_with(&e),
    };

    match app::run(&resolved) {
        Ok(summary) => {
            if summary.failed_violations > 0 {
                tracing::info!(
                    "{} violation(s) failed at runtime, as their design predicts",
                    summary.failed_violations
                );
            }
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &DemoError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
