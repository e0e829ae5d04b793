//! Handlebars-backed fragment renderer for garden pages.
//!
//! # Responsibility
//! - Register the page templates once and render them with typed contexts.
//! - Apply the engine's default HTML escaping to all note-sourced text.
//!
//! # Invariants
//! - Section and entry order is the static taxonomy order.
//! - An empty filter result renders an empty list, not an error.
//! - Pre-compiled home-note HTML is the only unescaped insertion point
//!   besides fragments this renderer produced itself.

use crate::config::SiteConfig;
use crate::index::NoteIndex;
use crate::model::note::{HomeNote, Note};
use crate::model::taxonomy::{Section, Taxonomy};
use handlebars::Handlebars;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RenderResult<T> = Result<T, RenderError>;

/// Renderer error for template registration and rendering.
#[derive(Debug)]
pub enum RenderError {
    /// A built-in template failed to compile.
    Template(handlebars::TemplateError),
    /// Rendering a registered template failed.
    Render(handlebars::RenderError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template(err) => write!(f, "invalid page template: {err}"),
            Self::Render(err) => write!(f, "page rendering failed: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Template(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(value: handlebars::TemplateError) -> Self {
        Self::Template(value)
    }
}

impl From<handlebars::RenderError> for RenderError {
    fn from(value: handlebars::RenderError) -> Self {
        Self::Render(value)
    }
}

const NOTE_LIST_TEMPLATE: &str = "<ul class=\"bias-list\">\
{{#each notes}}\
<li><a href=\"{{href}}\" class=\"flaw-name\">{{title}}</a>: \
<span class=\"flaw-desc\">{{excerpt}}</span></li>\
{{/each}}\
</ul>";

const SECTION_TEMPLATE: &str = "<h3 id=\"{{id}}\">{{title}}</h3>\n\
{{#if intro}}<p>{{intro}}</p>\n{{/if}}\
{{#each entries}}\
<h4>{{heading}}</h4>\n\
{{#if description}}<p>{{description}}</p>\n{{/if}}\
{{{list_html}}}\n\
{{/each}}";

const HOME_TEMPLATE: &str = "<div class=\"block\">\n\
<h1>{{title}}</h1>\n\
<p class=\"lead\">{{description}}</p>\n\
</div>\n\
<ol>\n\
{{#each sections}}<li><a href=\"#{{id}}\">{{title}}</a></li>\n{{/each}}\
</ol>\n\
{{#each sections}}{{{html}}}{{/each}}\
<p><a href=\"{{sitemap_href}}\">All Notes...</a></p>\n";

const HOME_NOTE_TEMPLATE: &str = "<div class=\"note-area\">\n\
<h1 class=\"note-title\">{{title}}</h1>\n\
<div class=\"note-content\">{{{html}}}</div>\n\
</div>\n";

#[derive(Serialize)]
struct NoteItemContext {
    href: String,
    title: String,
    excerpt: String,
}

#[derive(Serialize)]
struct NoteListContext {
    notes: Vec<NoteItemContext>,
}

#[derive(Serialize)]
struct EntryContext {
    heading: String,
    description: Option<String>,
    list_html: String,
}

#[derive(Serialize)]
struct SectionContext {
    id: String,
    title: String,
    intro: Option<String>,
    entries: Vec<EntryContext>,
}

#[derive(Serialize)]
struct HomeSectionContext {
    id: String,
    title: String,
    html: String,
}

#[derive(Serialize)]
struct HomeContext {
    title: String,
    description: String,
    sections: Vec<HomeSectionContext>,
    sitemap_href: String,
}

/// Stateless fragment renderer over a fixed template registry.
pub struct HtmlRenderer {
    handlebars: Handlebars<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer with all page templates registered.
    pub fn new() -> RenderResult<Self> {
        let mut handlebars = Handlebars::new();
        // Optional context fields (intro, description) are simply absent when
        // unset; strict mode would turn those into render failures.
        handlebars.set_strict_mode(false);
        handlebars.register_template_string("note_list", NOTE_LIST_TEMPLATE)?;
        handlebars.register_template_string("section", SECTION_TEMPLATE)?;
        handlebars.register_template_string("home", HOME_TEMPLATE)?;
        handlebars.register_template_string("home_note", HOME_NOTE_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Renders one note list in the given order.
    ///
    /// Each note becomes a link (display text = title, target = prefixed
    /// slug) followed by the note's excerpt. An empty slice renders an empty
    /// list element.
    pub fn render_note_list(&self, notes: &[&Note], path_prefix: &str) -> RenderResult<String> {
        let context = NoteListContext {
            notes: notes
                .iter()
                .map(|note| NoteItemContext {
                    href: join_href(path_prefix, &note.slug),
                    title: note.title.clone(),
                    excerpt: note.excerpt.clone(),
                })
                .collect(),
        };
        Ok(self.handlebars.render("note_list", &context)?)
    }

    /// Renders one section: heading, optional intro, then every entry with
    /// its tag-filtered note list.
    pub fn render_section(
        &self,
        section: &Section,
        index: &NoteIndex,
        path_prefix: &str,
    ) -> RenderResult<String> {
        let mut entries = Vec::with_capacity(section.entries.len());
        for entry in &section.entries {
            let matched = index.filter_by_tag(&entry.tag);
            entries.push(EntryContext {
                heading: entry.heading.clone(),
                description: entry.description.clone(),
                list_html: self.render_note_list(&matched, path_prefix)?,
            });
        }

        let context = SectionContext {
            id: section.id.clone(),
            title: section.title.clone(),
            intro: section.intro.clone(),
            entries,
        };
        Ok(self.handlebars.render("section", &context)?)
    }

    /// Renders the taxonomy home fragment: site heading, table of contents,
    /// every section in taxonomy order, and the sitemap link.
    pub fn render_home(
        &self,
        config: &SiteConfig,
        taxonomy: &Taxonomy,
        index: &NoteIndex,
    ) -> RenderResult<String> {
        let mut sections = Vec::with_capacity(taxonomy.sections.len());
        for section in &taxonomy.sections {
            sections.push(HomeSectionContext {
                id: section.id.clone(),
                title: section.title.clone(),
                html: self.render_section(section, index, &config.path_prefix)?,
            });
        }

        let context = HomeContext {
            title: config.title.clone(),
            description: config.description.clone(),
            sections,
            sitemap_href: join_href(&config.path_prefix, "/sitemap"),
        };
        Ok(self.handlebars.render("home", &context)?)
    }

    /// Renders the pre-compiled home-note override.
    pub fn render_home_note(&self, home_note: &HomeNote) -> RenderResult<String> {
        Ok(self.handlebars.render("home_note", home_note)?)
    }
}

/// Joins the configured path prefix with an absolute note slug.
fn join_href(path_prefix: &str, slug: &str) -> String {
    let prefix = path_prefix.strip_suffix('/').unwrap_or(path_prefix);
    format!("{prefix}{slug}")
}
