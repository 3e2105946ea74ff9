//! CLI command implementations for macrolab.
//!
//! Each module corresponds to a subcommand (`macrolab <command>`).

pub mod debug;
pub mod list;
pub mod render;
