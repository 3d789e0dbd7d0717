//! Command handlers for the size-limit CLI
//!
//! There are no subcommands; [`cmd_run`] is the single entry point.

pub mod run;

pub use run::cmd_run;
