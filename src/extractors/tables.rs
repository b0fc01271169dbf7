// src/extractors/tables.rs

// --- Imports ---
use std::path::Path;

use unpdf::{Block, ParseOptions, TableCell};

use crate::utils::error::ExtractError;

// --- Data Structures ---

/// One table row as reported by the detector. `None` marks a cell with no text.
pub type Row = Vec<Option<String>>;

/// Rows of a single detected table, in reading order.
pub type Table = Vec<Row>;

/// All tables found on one page.
#[derive(Debug, Clone, Default)]
pub struct PageTables {
    pub tables: Vec<Table>,
}

/// Anything that can turn a PDF on disk into pages of tables.
///
/// Implementations own the open document for the duration of the call and
/// must release it before returning, on success and on error alike.
pub trait TableSource: Send + Sync {
    fn read_tables(&self, path: &Path) -> Result<Vec<PageTables>, ExtractError>;
}

// --- unpdf-backed implementation ---

/// Table detection through the `unpdf` crate.
#[derive(Debug, Clone, Default)]
pub struct UnpdfSource {
    lenient: bool,
}

impl UnpdfSource {
    pub fn new() -> Self { Self::default() }

    /// Skip invalid content instead of failing the whole document.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    fn parse_options(&self) -> ParseOptions {
        // Documents already run in parallel, keep each parse on its own thread.
        let options = ParseOptions::new().with_resources(false).sequential();
        if self.lenient {
            options.lenient()
        } else {
            options
        }
    }
}

impl TableSource for UnpdfSource {
    fn read_tables(&self, path: &Path) -> Result<Vec<PageTables>, ExtractError> {
        tracing::debug!("Opening {} with unpdf", path.display());

        // The parsed document is owned here and dropped on every exit path.
        let document = unpdf::parse_file_with_options(path, self.parse_options())
            .map_err(|source| ExtractError::DocumentOpen {
                path: path.to_path_buf(),
                source,
            })?;

        let pages = document
            .pages
            .iter()
            .map(|page| PageTables {
                tables: page
                    .elements
                    .iter()
                    .filter_map(|block| match block {
                        Block::Table(table) => Some(
                            table
                                .rows
                                .iter()
                                .map(|row| row.cells.iter().map(cell_text).collect::<Row>())
                                .collect::<Table>(),
                        ),
                        _ => None,
                    })
                    .collect(),
            })
            .collect();

        Ok(pages)
    }
}

fn cell_text(cell: &TableCell) -> Option<String> {
    if cell.content.is_empty() {
        None
    } else {
        Some(cell.plain_text())
    }
}
