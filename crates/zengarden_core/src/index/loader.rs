//! Note-index ingestion from the content pipeline export.
//!
//! # Responsibility
//! - Decode the pipeline's JSON export into domain `Note` values.
//! - Enforce the public-visibility contract before notes reach the index.
//!
//! # Invariants
//! - Records carrying a non-public `visibility` value never reach the index.
//! - Absent `frontmatter.tags` loads as `None`, keeping tagless notes out of
//!   every tag filter result.
//! - Invalid records fail the whole load instead of being silently skipped.

use crate::index::excerpt::derive_excerpt;
use crate::index::NoteIndex;
use crate::model::note::{Note, NoteValidationError};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PUBLIC_VISIBILITY: &str = "public";

pub type LoaderResult<T> = Result<T, LoaderError>;

/// Loader error for note-index ingestion.
#[derive(Debug)]
pub enum LoaderError {
    /// The export is not valid JSON for the expected record shape.
    Json(serde_json::Error),
    /// One record violated note invariants.
    InvalidRecord {
        position: usize,
        source: NoteValidationError,
    },
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid note index export: {err}"),
            Self::InvalidRecord { position, source } => {
                write!(f, "invalid note record at position {position}: {source}")
            }
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Wire shape of one exported note record.
///
/// Mirrors the pipeline export: derived fields under `fields`, authored
/// frontmatter under `frontmatter`, plus optional excerpt/body projections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    /// Pipeline-derived summary, when the pipeline produced one.
    pub excerpt: Option<String>,
    /// Raw markdown body, used as an excerpt fallback source.
    pub raw_markdown_body: Option<String>,
    /// Derived per-note fields.
    pub fields: NoteFields,
    /// Authored frontmatter. Absent for notes with no frontmatter block.
    #[serde(default)]
    pub frontmatter: NoteFrontmatter,
}

/// Pipeline-derived fields of one note.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteFields {
    pub slug: String,
    pub title: String,
    pub date: String,
    /// Publication state; only `"public"` records may enter the index.
    pub visibility: Option<String>,
}

/// Authored frontmatter of one note.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFrontmatter {
    pub tags: Option<Vec<String>>,
}

impl NoteRecord {
    /// Whether this record may enter the public index.
    ///
    /// A missing `visibility` field is trusted as pre-filtered upstream; an
    /// explicit non-public value is always dropped.
    pub fn is_public(&self) -> bool {
        match self.fields.visibility.as_deref() {
            Some(value) => value == PUBLIC_VISIBILITY,
            None => true,
        }
    }
}

/// Loads the public note index from the pipeline's JSON export.
///
/// # Errors
/// - Malformed JSON or an unexpected record shape.
/// - Records violating note invariants (empty slug/title, relative slug).
pub fn load_index_from_json(json: &str) -> LoaderResult<NoteIndex> {
    let records: Vec<NoteRecord> = serde_json::from_str(json)?;
    notes_from_records(records).map(NoteIndex::new)
}

/// Converts already-decoded records into validated notes, in export order.
pub fn notes_from_records(records: Vec<NoteRecord>) -> LoaderResult<Vec<Note>> {
    let mut notes = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        if !record.is_public() {
            continue;
        }
        let note = note_from_record(record);
        note.validate()
            .map_err(|source| LoaderError::InvalidRecord { position, source })?;
        notes.push(note);
    }
    Ok(notes)
}

fn note_from_record(record: NoteRecord) -> Note {
    let excerpt = record
        .excerpt
        .filter(|excerpt| !excerpt.trim().is_empty())
        .or_else(|| record.raw_markdown_body.as_deref().and_then(derive_excerpt))
        .unwrap_or_default();

    Note {
        slug: record.fields.slug,
        title: record.fields.title,
        date: record.fields.date,
        excerpt,
        tags: record.frontmatter.tags,
    }
}
