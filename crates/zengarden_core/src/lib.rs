//! Core domain logic for the zengarden site.
//! This crate is the single source of truth for page-rendering invariants.

pub mod config;
pub mod index;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use config::{load_site_config, ConfigError, ConfigResult, MenuItem, MenuItemKind, SiteConfig};
pub use index::loader::{
    load_index_from_json, notes_from_records, LoaderError, LoaderResult, NoteFields,
    NoteFrontmatter, NoteRecord,
};
pub use index::{filter_by_tag, NoteIndex};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{HomeNote, Note, NoteValidationError};
pub use model::taxonomy::{home_taxonomy, Section, Taxonomy, TaxonomyEntry, TaxonomyError};
pub use render::{HtmlRenderer, RenderError, RenderResult};
pub use service::page_service::{PageError, PageResult, PageService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
