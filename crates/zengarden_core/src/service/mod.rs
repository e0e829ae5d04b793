//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, index and renderer into page-level APIs.
//! - Keep CLI/build surfaces decoupled from template details.

pub mod page_service;
