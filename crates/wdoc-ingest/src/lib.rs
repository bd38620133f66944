//! Document ingestion: discovery, widget fence scanning, and config parsing.

pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod fence;
pub mod nav;

pub use config::{ConfigOutcome, parse_config, yaml_to_json, yaml11_booleans};
pub use discovery::{is_markdown, list_markdown_files};
pub use document::{Document, extract_title, load_document, to_slash};
pub use error::{IngestError, Result};
pub use fence::{CodeFenceTracker, FenceBlock, FenceScan, ScanOptions, UnclosedFence, scan_fences};
pub use nav::{NavLink, extract_nav_links};

/// Discover and load every Markdown document under `root`.
pub fn load_documents(root: &std::path::Path) -> Result<Vec<Document>> {
    list_markdown_files(root)?
        .iter()
        .map(|path| load_document(root, path))
        .collect()
}
