//! Home page rendering use-case service.
//!
//! # Responsibility
//! - Validate inputs once and orchestrate the renderer for the home page.
//! - Emit structured render events for diagnostics.
//!
//! # Invariants
//! - Config and taxonomy are validated before any rendering happens.
//! - An empty note index is a valid input and renders every static heading.
//! - One render pass is a single stateless transformation; there is no
//!   partial failure to recover from.

use crate::config::{ConfigError, SiteConfig};
use crate::index::NoteIndex;
use crate::model::note::HomeNote;
use crate::model::taxonomy::{Taxonomy, TaxonomyError};
use crate::render::{HtmlRenderer, RenderError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PageResult<T> = Result<T, PageError>;

/// Service error for page rendering use-cases.
#[derive(Debug)]
pub enum PageError {
    /// Site configuration violates authoring invariants.
    Config(ConfigError),
    /// Taxonomy data violates authoring invariants.
    Taxonomy(TaxonomyError),
    /// Template registration or rendering failure.
    Render(RenderError),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Taxonomy(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Taxonomy(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ConfigError> for PageError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TaxonomyError> for PageError {
    fn from(value: TaxonomyError) -> Self {
        Self::Taxonomy(value)
    }
}

impl From<RenderError> for PageError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

/// Facade that turns one immutable input snapshot into the home fragment.
pub struct PageService {
    renderer: HtmlRenderer,
}

impl PageService {
    /// Creates a service with a ready template registry.
    pub fn new() -> PageResult<Self> {
        Ok(Self {
            renderer: HtmlRenderer::new()?,
        })
    }

    /// Renders the home page fragment.
    ///
    /// When `home_note` is present its pre-compiled body wins over the
    /// taxonomy landing page, mirroring a published `/home` note.
    pub fn render_home(
        &self,
        config: &SiteConfig,
        taxonomy: &Taxonomy,
        index: &NoteIndex,
        home_note: Option<&HomeNote>,
    ) -> PageResult<String> {
        config.validate()?;
        taxonomy.validate()?;

        if let Some(home_note) = home_note {
            let html = self.renderer.render_home_note(home_note)?;
            info!(
                "event=home_render module=service status=ok mode=note_override notes={}",
                index.len()
            );
            return Ok(html);
        }

        let html = self.renderer.render_home(config, taxonomy, index)?;
        info!(
            "event=home_render module=service status=ok mode=taxonomy sections={} entries={} notes={}",
            taxonomy.sections.len(),
            taxonomy.entry_count(),
            index.len()
        );
        Ok(html)
    }

    /// Direct access to the underlying renderer for partial fragments.
    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }
}
