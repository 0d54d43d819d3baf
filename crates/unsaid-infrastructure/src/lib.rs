//! Infrastructure layer for UNSAID.
//!
//! File-based persistence for translation records and path management
//! for configuration and data files.

pub mod dto;
pub mod paths;
pub mod toml_translation_repository;

pub use crate::paths::UnsaidPaths;
pub use crate::toml_translation_repository::TomlTranslationRepository;
