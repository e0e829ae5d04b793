//! Domain model for garden content.
//!
//! # Responsibility
//! - Define the read model for published notes.
//! - Define the hand-authored taxonomy used to group notes on the home page.
//!
//! # Invariants
//! - Notes are immutable snapshots produced by the content pipeline.
//! - The taxonomy is static data; its authoring order drives render order.

pub mod note;
pub mod taxonomy;
