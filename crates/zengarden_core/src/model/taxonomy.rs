//! Static taxonomy of home page sections and tagged sub-topics.
//!
//! # Responsibility
//! - Define the section/entry structure the home page groups notes by.
//! - Ship the hand-authored cognitive-bias taxonomy.
//!
//! # Invariants
//! - The taxonomy is authored by hand, never derived from note data.
//! - Section ids and entry tags are unique across the whole taxonomy.
//! - Iteration order is authoring order and drives render order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One sub-topic of a section, bound to exactly one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    /// Tag that selects the notes listed under this entry.
    pub tag: String,
    /// Sub-topic heading shown above the note list.
    pub heading: String,
    /// Optional explanatory text shown between heading and list.
    pub description: Option<String>,
}

impl TaxonomyEntry {
    /// Creates an entry without a description.
    pub fn new(tag: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            heading: heading.into(),
            description: None,
        }
    }

    /// Builder-style setter for the entry description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One top-level grouping of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id used for in-page links.
    pub id: String,
    /// Section heading.
    pub title: String,
    /// Optional introductory paragraph.
    pub intro: Option<String>,
    /// Sub-topics in authoring order.
    pub entries: Vec<TaxonomyEntry>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            intro: None,
            entries: Vec::new(),
        }
    }

    /// Builder-style setter for the introductory paragraph.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Builder-style appender for one entry.
    pub fn entry(mut self, entry: TaxonomyEntry) -> Self {
        self.entries.push(entry);
        self
    }
}

/// The full hand-authored grouping structure of the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Sections in authoring order.
    pub sections: Vec<Section>,
}

/// Validation error for hand-authored taxonomy data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A section has an empty anchor id.
    EmptySectionId { title: String },
    /// An entry has an empty tag.
    EmptyTag { section: String },
    /// An entry has an empty heading.
    EmptyHeading { tag: String },
    /// Two sections share the same anchor id.
    DuplicateSectionId(String),
    /// Two entries share the same tag.
    DuplicateTag(String),
}

impl Display for TaxonomyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySectionId { title } => {
                write!(f, "section `{title}` has an empty anchor id")
            }
            Self::EmptyTag { section } => {
                write!(f, "section `{section}` contains an entry with an empty tag")
            }
            Self::EmptyHeading { tag } => {
                write!(f, "entry for tag `{tag}` has an empty heading")
            }
            Self::DuplicateSectionId(id) => write!(f, "duplicate section id `{id}`"),
            Self::DuplicateTag(tag) => write!(f, "duplicate entry tag `{tag}`"),
        }
    }
}

impl Error for TaxonomyError {}

impl Taxonomy {
    /// Creates a taxonomy from authored sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|section| section.entries.len()).sum()
    }

    /// Checks authoring invariants before the taxonomy is rendered.
    ///
    /// # Errors
    /// - Empty section ids, entry tags or entry headings are rejected.
    /// - Duplicate section ids or entry tags are rejected.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        let mut seen_ids = BTreeSet::new();
        let mut seen_tags = BTreeSet::new();

        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(TaxonomyError::EmptySectionId {
                    title: section.title.clone(),
                });
            }
            if !seen_ids.insert(section.id.as_str()) {
                return Err(TaxonomyError::DuplicateSectionId(section.id.clone()));
            }

            for entry in &section.entries {
                if entry.tag.trim().is_empty() {
                    return Err(TaxonomyError::EmptyTag {
                        section: section.id.clone(),
                    });
                }
                if entry.heading.trim().is_empty() {
                    return Err(TaxonomyError::EmptyHeading {
                        tag: entry.tag.clone(),
                    });
                }
                if !seen_tags.insert(entry.tag.as_str()) {
                    return Err(TaxonomyError::DuplicateTag(entry.tag.clone()));
                }
            }
        }

        Ok(())
    }
}

/// The authored cognitive-bias taxonomy of the home page.
///
/// Section and entry texts are site content and are kept verbatim as
/// published, spelling included.
pub fn home_taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        Section::new("info-overload", "Information overload")
            .with_intro(
                "Our brain filters out information that it thinks is not important. \
                 There is too much information available - its not practical to process all of it.",
            )
            .entry(TaxonomyEntry::new(
                "cbias-notice-primed-repeated",
                "Notice only that are primed or repeated",
            ))
            .entry(
                TaxonomyEntry::new(
                    "cbias-notice-specific",
                    "Bizarre/funny/visually-striking/anthropomorphic are more Noticeable",
                )
                .with_description("We generally skip information that's ordinary or expected."),
            )
            .entry(TaxonomyEntry::new(
                "cbias-notice-change",
                "Change is Noticed Prominantly",
            ))
            .entry(
                TaxonomyEntry::new(
                    "cbias-notice-confirmation",
                    "Drawn to details that confirms existing beliefs",
                )
                .with_description("And ignore/miss details that contridicts our beliefs"),
            )
            .entry(TaxonomyEntry::new(
                "cbias-notice-others-flaws",
                "We notice flaws in others easier than in ourselves.",
            )),
        Section::new("no-meaning", "Not enough meaning")
            .with_intro(
                "The world is too complex to understand fully. So we compensate by filling in \
                 the gaps of our understanding to make better sense of it - or at least have a \
                 belief that we have an understanding of the world. We assign meaning to the \
                 world - we do our own sensemaking.",
            )
            .entry(
                TaxonomyEntry::new(
                    "cbias-meaning-from-little-data",
                    "We find patterns and meaning even with little data",
                )
                .with_description(
                    "Our brain needs to feel that it has a coherent model/story about the \
                     situation - even if we have too little information about it.",
                ),
            )
            .entry(
                TaxonomyEntry::new(
                    "cbias-meaning-from-stereotypes",
                    "We jump to conclusions using stereotypes, generalities, past occurrences.",
                )
                .with_description(
                    "When we have only limited information/gap in knowledge we tend to fill in \
                     the gaps using best guesses from stereotypes and generalities. Once its \
                     done, we can't easily determine which part is real and which part is \
                     filled up.",
                ),
            )
            .entry(
                TaxonomyEntry::new(
                    "cbias-known-things-better",
                    "Belief that liked or known things are better",
                )
                .with_description(
                    "Belief that people/things we like or familiar with are better than that \
                     we don't like/are familiar with.",
                ),
            )
            .entry(
                TaxonomyEntry::new(
                    "cbias-math-simplification",
                    "Simplification of Probability and Numbers",
                )
                .with_description(
                    "Subconscious mind is bad at maths - and uses simplification to optimize \
                     decision making. This can get wrong results.",
                ),
            )
            .entry(
                TaxonomyEntry::new("cbias-guess-thoughts", "We think we know what others think")
                    .with_description(
                        "We model the thinking of other people based on our own mind or a much \
                         simpler mind than ours.",
                    ),
            )
            .entry(TaxonomyEntry::new(
                "cbias-project-mind-state",
                "Current mind state is projected to past and future",
            )),
        Section::new("act-fast", "We have to act fast")
            .with_intro(
                "We evolved with the need to make quick decisions when faced with limited time \
                 and information. This programming continues in the present time in form of \
                 these thinking flaws.",
            )
            .entry(TaxonomyEntry::new(
                "cbias-act-fast-important",
                "To act, we should feel important and impactful",
            ))
            .entry(
                TaxonomyEntry::new(
                    "cbias-favor-immediate",
                    "Favor immediate, known things over distant ones",
                )
                .with_description(
                    "We favor present over future. Stories about specific individuals over \
                     anonymous person.",
                ),
            )
            .entry(
                TaxonomyEntry::new("cbias-finish", "We want to finish things we have invested in")
                    .with_description(
                        "Helps us to finish things, even with difficult. Actions have inertia - \
                         once started its easier to continue.",
                    ),
            )
            .entry(TaxonomyEntry::new(
                "cbias-autonomy",
                "We want to have autonomy and status. Also, we want to avoid irreversable decisions",
            ))
            .entry(TaxonomyEntry::new(
                "cbias-prefer-simple",
                "We prefer simple or complete options over complex, ambiguous options",
            )),
        Section::new("what-to-remember", "What to remember")
            .with_intro(
                "We have to prioritize what te remember and what to discard. We have a set of \
                 filters that will help us do this - but it can cause issues too.",
            )
            .entry(TaxonomyEntry::new(
                "cbias-memory-edit",
                "We edit memories after the event",
            ))
            .entry(TaxonomyEntry::new(
                "cbias-memory-general",
                "We discard specifics to create generalizations",
            ))
            .entry(
                TaxonomyEntry::new(
                    "cbias-reduce-to-key",
                    "We reduce events and lists to its key elements",
                )
                .with_description("We chose a few items to represent the whole."),
            )
            .entry(
                TaxonomyEntry::new(
                    "cbias-memory-experience",
                    "We store memory differently based on how the experience was",
                )
                .with_description(
                    "Our brain will save things that it thinks is important. Importantce is \
                     judged based on the situation - not just the value of the information. \
                     Eg. Traumatic memories can be very strong.",
                ),
            ),
    ])
}

#[cfg(test)]
mod tests {
    use super::{home_taxonomy, Section, Taxonomy, TaxonomyEntry, TaxonomyError};

    #[test]
    fn home_taxonomy_is_valid_and_fully_populated() {
        let taxonomy = home_taxonomy();
        taxonomy.validate().expect("authored taxonomy should be valid");
        assert_eq!(taxonomy.sections.len(), 4);
        assert_eq!(taxonomy.entry_count(), 20);
    }

    #[test]
    fn validate_rejects_duplicate_section_ids() {
        let taxonomy = Taxonomy::new(vec![
            Section::new("dup", "First"),
            Section::new("dup", "Second"),
        ]);
        assert_eq!(
            taxonomy.validate(),
            Err(TaxonomyError::DuplicateSectionId("dup".to_string()))
        );
    }

    #[test]
    fn validate_rejects_duplicate_tags_across_sections() {
        let taxonomy = Taxonomy::new(vec![
            Section::new("one", "First").entry(TaxonomyEntry::new("same-tag", "A")),
            Section::new("two", "Second").entry(TaxonomyEntry::new("same-tag", "B")),
        ]);
        assert_eq!(
            taxonomy.validate(),
            Err(TaxonomyError::DuplicateTag("same-tag".to_string()))
        );
    }

    #[test]
    fn validate_rejects_blank_ids_tags_and_headings() {
        let blank_id = Taxonomy::new(vec![Section::new("  ", "First")]);
        assert!(matches!(
            blank_id.validate(),
            Err(TaxonomyError::EmptySectionId { .. })
        ));

        let blank_tag =
            Taxonomy::new(vec![
                Section::new("one", "First").entry(TaxonomyEntry::new("", "A"))
            ]);
        assert!(matches!(
            blank_tag.validate(),
            Err(TaxonomyError::EmptyTag { .. })
        ));

        let blank_heading =
            Taxonomy::new(vec![
                Section::new("one", "First").entry(TaxonomyEntry::new("tag", " "))
            ]);
        assert!(matches!(
            blank_heading.validate(),
            Err(TaxonomyError::EmptyHeading { .. })
        ));
    }
}
