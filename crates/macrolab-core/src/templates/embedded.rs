//! Compile-time embedded templates for the render and debug commands.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/macrolab-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the variables they reference still
//! match what the render context provides.

// -------------------------------------------------------
// Built-in example macro
// -------------------------------------------------------

/// Rendered by `macrolab render` when no input file is given: a homing
/// message, a three-move loop, and a trailing comment.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../../templates/example.tmpl");

// -------------------------------------------------------
// Debug harness templates
// -------------------------------------------------------

/// Start-of-print sequence: parameter defaulting, derived extrusion math,
/// and a purge loop, each printed as labeled DEBUG sections.
pub const START_PRINT_DEBUG: &str = include_str!("../../../../templates/debug/start_print.tmpl");

/// End-of-print sequence: park-height branching with a clamp against the
/// build volume, printed as labeled DEBUG sections.
pub const END_PRINT_DEBUG: &str = include_str!("../../../../templates/debug/end_print.tmpl");
