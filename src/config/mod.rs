//! Configuration discovery, classification, and project metadata
//!
//! This module provides:
//! - Raw configuration entry types (`path`, `limit`, `name`, ...)
//! - Structural classification of a configuration value
//! - Lookup in package.json or a dedicated `.size-limit` file
//! - Inherited project metadata (package name, peer dependencies)

pub mod classify;
pub mod file;
pub mod loader;
pub mod manifest;

pub use classify::{classify, ConfigError};
pub use file::{
    ConfigSource, LimitSpec, LoadedConfig, PathSpec, RawEntry, CONFIG_FILE_NAMES,
    MANIFEST_FILE_NAME, MANIFEST_KEY,
};
pub use loader::ConfigLoader;
pub use manifest::ProjectManifest;
