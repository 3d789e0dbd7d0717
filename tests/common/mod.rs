//! Common test utilities and helpers
//!
//! - [`fixtures`] builds throwaway JS projects on disk
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::Project;
//!
//! fn test_something() {
//!     let project = Project::new()
//!         .file("index.js", "console.log(1)")
//!         .manifest(r#"{ "size-limit": [{ "path": "index.js" }] }"#);
//! }
//! ```

pub mod fixtures;
