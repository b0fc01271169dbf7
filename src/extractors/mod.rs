// src/extractors/mod.rs
pub mod blocklist;
pub mod tables;

// Re-export key extraction types for convenience
pub use blocklist::{entry_for_row, BlocklistEntry, BlocklistExtractor};
pub use tables::{PageTables, Row, Table, TableSource, UnpdfSource};
