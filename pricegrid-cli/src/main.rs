use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use pricegrid::{Denormalizer, InMemorySource, PriceSource, PricegridError};
use pricegrid_mock::MockSource;

mod args;

use args::{Args, Format};

fn main() -> ExitCode {
    // Logs go to stderr so table/JSON output stays clean. Suggested: RUST_LOG=pricegrid=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let args = Args::parse();
    match run(&args) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "pricegrid failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn source(args: &Args) -> Result<Arc<dyn PriceSource>, PricegridError> {
    if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PricegridError::Io(format!("{}: {e}", path.display())))?;
        return Ok(Arc::new(InMemorySource::from_json(&text)?));
    }
    if args.all_fixtures {
        Ok(Arc::new(MockSource::new()))
    } else {
        Ok(Arc::new(MockSource::reference()))
    }
}

fn run(args: &Args) -> Result<String, PricegridError> {
    let grid = Denormalizer::builder()
        .with_source(source(args)?)
        .config(args.config())
        .build()?;
    let rows = grid.run()?;
    match args.format {
        Format::Table => Ok(grid.render(&rows)),
        Format::Json => serde_json::to_string_pretty(&rows)
            .map(|s| s + "\n")
            .map_err(|e| PricegridError::Json(e.to_string())),
    }
}
