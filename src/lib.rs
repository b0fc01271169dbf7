//! Batch extraction of DNS blocklist entries from tables in PDF documents.
//!
//! Every `*.pdf` in a directory is parsed in parallel, the third column of each
//! non-header table row is collected (skipping blanks and IP addresses), and
//! the values are written as unbound `local-zone` directives.

pub mod extractors;
pub mod pipeline;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod fixtures;
