//! Application layer for UNSAID.
//!
//! This crate provides the use case implementation that coordinates the
//! domain, interaction, and infrastructure layers to implement the
//! translate/history/delete surface.

pub mod translation_service;

pub use translation_service::{HISTORY_LIMIT, TranslationService};
