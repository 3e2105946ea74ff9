//! Core library for the macrolab toolkit.
//!
//! Provides everything the CLI needs to render and debug Klipper-style
//! g-code macro templates locally: block extraction from config text,
//! sample parameters with JSON override merging, a strict MiniJinja
//! renderer, embedded example/debug templates, and report assembly.
//!
//! Nothing here talks to a printer. Rendering is purely local, meant for
//! validating templates before they reach real firmware.

pub mod error;
pub mod extract;
pub mod params;
pub mod report;
pub mod templates;
