// src/storage/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extractors::BlocklistEntry;
use crate::utils::error::StorageError;

/// Lists the `.pdf` files directly inside `dir`, sorted by path.
///
/// Not recursive. The extension match ignores ASCII case.
pub fn discover_documents<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, StorageError> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);

        if is_pdf && path.is_file() {
            documents.push(path);
        }
    }

    documents.sort();
    tracing::debug!("Discovered {} PDF files in {}", documents.len(), dir.as_ref().display());
    Ok(documents)
}

/// Writes the entries verbatim to `path`, replacing any existing file.
pub fn write_blocklist(path: &Path, entries: &[BlocklistEntry]) -> Result<(), StorageError> {
    let mut contents = String::new();
    for entry in entries {
        contents.push_str(&entry.to_string());
    }

    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    tracing::debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Outcome of a single document, as recorded in the run report.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub file: String,
    pub status: DocumentStatus,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Ok,
    Failed,
}

/// Summary of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: String,
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub documents: Vec<DocumentReport>,
    pub total_lines: usize,
    pub output_written: bool,
}

/// Saves the run report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &RunReport) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;

    fs::write(path, json)?;

    tracing::info!("Saved run report to {}", path.display());
    Ok(())
}
