// src/extractors/blocklist.rs

// --- Imports ---
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::extractors::tables::{PageTables, Row, TableSource};
use crate::utils::address::is_valid_address;
use crate::utils::error::ExtractError;

// --- Constants ---
/// Zero-based index of the column holding the blocked name.
const TARGET_COLUMN: usize = 2;
/// One-based index of the header row in every table.
const HEADER_ROW: usize = 1;

// --- Data Structures ---

/// A single unbound `local-zone` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistEntry {
    value: String,
}

impl BlocklistEntry {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for BlocklistEntry {
    // Quotes inside the value are written through unescaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "local-zone: \"{}\" always_nxdomain", self.value)
    }
}

/// Applies the row filter to a single table row.
///
/// `row_index` is one-based within its table. Returns the entry for a
/// qualifying row: at least three columns, not the header, third column
/// non-blank after trimming and not an IP address.
pub fn entry_for_row(row: &Row, row_index: usize) -> Option<BlocklistEntry> {
    if row.len() <= TARGET_COLUMN || row_index == HEADER_ROW {
        return None;
    }

    let value = row[TARGET_COLUMN].as_deref()?.trim();
    if value.is_empty() || is_valid_address(Some(value)) {
        return None;
    }

    Some(BlocklistEntry { value: value.to_string() })
}

/// Pulls blocklist entries out of PDF tables.
#[derive(Clone)]
pub struct BlocklistExtractor {
    source: Arc<dyn TableSource>,
}

impl BlocklistExtractor {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self { source }
    }

    /// Extracts every qualifying entry from one document, in page/table/row order.
    pub fn extract(&self, path: &Path) -> Result<Vec<BlocklistEntry>, ExtractError> {
        let pages = self.source.read_tables(path)?;
        Ok(collect_entries(&display_name(path), &pages))
    }
}

impl fmt::Debug for BlocklistExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlocklistExtractor").finish_non_exhaustive()
    }
}

fn collect_entries(file: &str, pages: &[PageTables]) -> Vec<BlocklistEntry> {
    let mut entries = Vec::new();

    for (page_index, page) in pages.iter().enumerate() {
        let page_number = page_index + 1;

        if page.tables.is_empty() {
            tracing::info!("File: {} | Page {}: no tables found", file, page_number);
            continue;
        }

        for (table_index, table) in page.tables.iter().enumerate() {
            for (row_index, row) in table.iter().enumerate() {
                let row_number = row_index + 1;
                if let Some(entry) = entry_for_row(row, row_number) {
                    tracing::info!(
                        "File: {} | Page {}, Table {}, Row {}: '{}' added to output",
                        file,
                        page_number,
                        table_index + 1,
                        row_number,
                        entry.value()
                    );
                    entries.push(entry);
                }
            }
        }
    }

    entries
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
