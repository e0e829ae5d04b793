//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record for one published garden note.
//! - Provide the guarded tag-membership accessor used by every tag query.
//!
//! # Invariants
//! - `slug` is the unique URL path of the note and always starts with `/`.
//! - A note with absent or empty `tags` matches no tag.
//! - Tag matching is exact string equality; no hierarchy, no synonyms.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One published content entry of the garden.
///
/// Instances come from the external content pipeline and are never mutated
/// afterwards. Visibility filtering happens during index loading; by the time
/// a `Note` exists it is public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique URL path, e.g. `/confirmation-bias`.
    pub slug: String,
    /// Human-readable note title.
    pub title: String,
    /// Publication date as formatted by the pipeline. Display metadata only.
    pub date: String,
    /// Derived plain-text summary of the note body.
    pub excerpt: String,
    /// Grouping labels. `None` when the note frontmatter carries no tags.
    pub tags: Option<Vec<String>>,
}

/// Validation error for note records arriving from the content pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// The record carries no slug at all.
    EmptySlug,
    /// The slug is not an absolute URL path.
    SlugNotAbsolute(String),
    /// The record carries no title.
    EmptyTitle { slug: String },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlug => write!(f, "note slug cannot be empty"),
            Self::SlugNotAbsolute(slug) => {
                write!(f, "note slug must start with `/`, got `{slug}`")
            }
            Self::EmptyTitle { slug } => write!(f, "note `{slug}` has an empty title"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates a note record from already-extracted pipeline fields.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        excerpt: impl Into<String>,
        tags: Option<Vec<String>>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            date: date.into(),
            excerpt: excerpt.into(),
            tags,
        }
    }

    /// Returns whether `tag` is an element of this note's tag list.
    ///
    /// An absent or empty tag list matches nothing. This is the membership
    /// guard, not an error path.
    pub fn has_tag(&self, tag: &str) -> bool {
        match &self.tags {
            Some(tags) => tags.iter().any(|candidate| candidate == tag),
            None => false,
        }
    }

    /// Checks pipeline-facing invariants of this record.
    ///
    /// # Errors
    /// - Empty or relative slugs are rejected.
    /// - Empty titles are rejected.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.slug.trim().is_empty() {
            return Err(NoteValidationError::EmptySlug);
        }
        if !self.slug.starts_with('/') {
            return Err(NoteValidationError::SlugNotAbsolute(self.slug.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle {
                slug: self.slug.clone(),
            });
        }
        Ok(())
    }
}

/// Pre-compiled override for the home page.
///
/// When the pipeline publishes a note at `/home`, its compiled body replaces
/// the taxonomy landing page wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeNote {
    /// Title of the published home note.
    pub title: String,
    /// Body HTML already compiled by the pipeline; emitted verbatim.
    pub html: String,
}
