//! HTML rendering layer.
//!
//! # Responsibility
//! - Turn (site config, taxonomy, note index) into stable HTML fragments.
//! - Keep template details behind one renderer type.
//!
//! # Invariants
//! - Render order follows the static taxonomy, never the note index.
//! - Note-sourced text is always HTML-escaped.

mod html;

pub use html::{HtmlRenderer, RenderError, RenderResult};
