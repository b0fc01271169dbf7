// src/pipeline/mod.rs
//! Batch orchestration: discover documents, fan extraction out to a bounded
//! pool of blocking workers, gather results as they finish, write once.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::extractors::blocklist::display_name;
use crate::extractors::{BlocklistEntry, BlocklistExtractor};
use crate::storage::{self, DocumentReport, DocumentStatus, RunReport};
use crate::utils::error::{AppError, ExtractError, StorageError};

/// File name used for the blocklist when no explicit output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Everything a run needs; nothing is read from ambient process state.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub workers: usize,
    pub report_path: Option<PathBuf>,
}

impl BatchConfig {
    /// Defaults: `output.txt` inside `input_dir`, one worker per CPU, no report.
    pub fn new<P: AsRef<Path>>(input_dir: P) -> Self {
        let input_dir = input_dir.as_ref().to_path_buf();
        Self {
            output_path: input_dir.join(DEFAULT_OUTPUT_FILE),
            input_dir,
            workers: default_workers(),
            report_path: None,
        }
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output_path: P) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_report<P: Into<PathBuf>>(mut self, report_path: P) -> Self {
        self.report_path = Some(report_path.into());
        self
    }
}

/// Number of processing units on this host, at least one.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// No PDF files were found; nothing was written.
    NoInput,
    /// The output file was written (possibly empty).
    Completed { output_path: PathBuf, lines: usize },
    /// All documents were processed but the output could not be saved.
    WriteFailed { error: StorageError },
}

struct Finished {
    index: usize,
    path: PathBuf,
    result: Result<Vec<BlocklistEntry>, ExtractError>,
}

/// Runs one full batch over `config.input_dir`.
///
/// Per-document failures are logged and contribute no lines. Only an invalid
/// configuration or an unreadable input directory returns `Err`.
pub async fn run(config: &BatchConfig, extractor: BlocklistExtractor) -> Result<RunOutcome, AppError> {
    if config.workers == 0 {
        return Err(AppError::Config("worker count must be at least 1".to_string()));
    }

    let documents = storage::discover_documents(&config.input_dir)?;
    if documents.is_empty() {
        tracing::info!("No PDF files found in {}", config.input_dir.display());
        return Ok(RunOutcome::NoInput);
    }

    tracing::info!(
        "Found {} PDF files, extracting with {} workers",
        documents.len(),
        config.workers
    );

    let finished = collect(dispatch(documents.clone(), config.workers, extractor)).await;
    let (entries, reports) = merge_results(documents, finished);

    let outcome = match storage::write_blocklist(&config.output_path, &entries) {
        Ok(()) => {
            tracing::info!(
                "Extraction complete. {} lines saved to '{}'",
                entries.len(),
                config.output_path.display()
            );
            RunOutcome::Completed {
                output_path: config.output_path.clone(),
                lines: entries.len(),
            }
        }
        Err(error) => {
            tracing::error!(
                "Failed to write output file {}: {}",
                config.output_path.display(),
                error
            );
            RunOutcome::WriteFailed { error }
        }
    };

    if let Some(report_path) = &config.report_path {
        let report = RunReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            input_dir: config.input_dir.clone(),
            output_path: config.output_path.clone(),
            documents: reports,
            total_lines: entries.len(),
            output_written: matches!(outcome, RunOutcome::Completed { .. }),
        };
        if let Err(e) = storage::write_report(report_path, &report) {
            tracing::error!("Failed to save run report {}: {}", report_path.display(), e);
        }
    }

    Ok(outcome)
}

/// Orders results by discovery index and builds one report per document.
///
/// A document with no result at all (its task was lost to the runtime) is
/// reported as failed rather than dropped.
fn merge_results(documents: Vec<PathBuf>, mut finished: Vec<Finished>) -> (Vec<BlocklistEntry>, Vec<DocumentReport>) {
    let seen: HashSet<usize> = finished.iter().map(|f| f.index).collect();
    for (index, path) in documents.into_iter().enumerate() {
        if !seen.contains(&index) {
            finished.push(Finished {
                index,
                path,
                result: Err(ExtractError::Worker("task ended without a result".to_string())),
            });
        }
    }

    // Completion order is arbitrary; emit in discovery order so reruns match.
    finished.sort_by_key(|f| f.index);

    let mut entries = Vec::new();
    let mut reports = Vec::with_capacity(finished.len());
    for Finished { path, result, .. } in finished {
        let file = display_name(&path);
        match result {
            Ok(found) => {
                reports.push(DocumentReport {
                    file,
                    status: DocumentStatus::Ok,
                    lines: found.len(),
                    error: None,
                });
                entries.extend(found);
            }
            Err(e) => reports.push(DocumentReport {
                file,
                status: DocumentStatus::Failed,
                lines: 0,
                error: Some(e.to_string()),
            }),
        }
    }

    (entries, reports)
}

/// Spawns one task per document. At most `workers` extractions run at once,
/// each on the blocking pool since PDF parsing is CPU-bound.
fn dispatch(documents: Vec<PathBuf>, workers: usize, extractor: BlocklistExtractor) -> JoinSet<Finished> {
    let permits = Arc::new(Semaphore::new(workers));
    let mut tasks = JoinSet::new();

    for (index, path) in documents.into_iter().enumerate() {
        let permits = Arc::clone(&permits);
        let extractor = extractor.clone();

        tasks.spawn(async move {
            let result = match permits.acquire_owned().await {
                Ok(permit) => {
                    let worker_path = path.clone();
                    let joined = tokio::task::spawn_blocking(move || {
                        let _permit = permit;
                        extractor.extract(&worker_path)
                    })
                    .await;
                    joined.unwrap_or_else(|e| Err(ExtractError::Worker(e.to_string())))
                }
                Err(e) => Err(ExtractError::Worker(e.to_string())),
            };
            Finished { index, path, result }
        });
    }

    tasks
}

/// Drains the set in completion order, logging each document as it lands.
async fn collect(mut tasks: JoinSet<Finished>) -> Vec<Finished> {
    let mut finished = Vec::with_capacity(tasks.len());

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(done) => {
                let name = display_name(&done.path);
                match &done.result {
                    Ok(entries) => tracing::info!(
                        "Finished extracting {} ({} lines)",
                        name,
                        entries.len()
                    ),
                    Err(e) => tracing::error!("Error processing {}: {}", name, e),
                }
                finished.push(done);
            }
            Err(e) => tracing::error!("Extraction task failed: {}", e),
        }
    }

    finished
}
