// src/main.rs
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use pdf_blocklist::extractors::{BlocklistExtractor, UnpdfSource};
use pdf_blocklist::pipeline::{self, BatchConfig, RunOutcome};
use pdf_blocklist::utils;

/// Command Line Interface for the PDF blocklist extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory scanned (non-recursively) for PDF files
    #[arg(short, long, env = "PDF_BLOCKLIST_DIR", default_value = ".")]
    dir: PathBuf,

    /// Output file (default: output.txt inside --dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of parallel extraction workers (default: CPU count)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Skip invalid PDF content instead of failing the whole document
    #[arg(long)]
    lenient: bool,
}

impl Args {
    fn into_config(self) -> BatchConfig {
        let mut config = BatchConfig::new(&self.dir);
        if let Some(output) = self.output {
            config = config.with_output(output);
        }
        if let Some(jobs) = self.jobs {
            config = config.with_workers(jobs as usize);
        }
        if let Some(report) = self.report {
            config = config.with_report(report);
        }
        config
    }
}

#[tokio::main]
async fn main() {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Wire the unpdf table detector into the extractor
    let source = UnpdfSource::new().lenient(args.lenient);
    let extractor = BlocklistExtractor::new(Arc::new(source));
    let config = args.into_config();

    // 4. Run the batch. Failures are reported, never turned into an exit code.
    match pipeline::run(&config, extractor).await {
        Ok(RunOutcome::Completed { .. }) => {}
        Ok(RunOutcome::NoInput) => tracing::warn!("Nothing to do."),
        Ok(RunOutcome::WriteFailed { .. }) => {
            tracing::warn!("Extraction finished but no output was saved.")
        }
        Err(e) => tracing::error!("Run aborted: {}", e),
    }
}
