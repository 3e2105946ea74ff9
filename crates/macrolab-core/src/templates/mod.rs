//! Template system for the macrolab render and debug commands.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [MiniJinja](https://docs.rs/minijinja)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Jinja syntax, the same dialect Klipper evaluates at print
//! time. The render context exposes the parameter set twice:
//! - `{{ params.BED_TEMP }}`: nested access, the way Klipper macros read it
//! - `{{ BED_TEMP }}`: flat access for quick experiments
//!
//! ## Adding a new template
//!
//! 1. Create the `.tmpl` file under `templates/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Run `cargo build` to verify the path resolves
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to that file and checked at compile-time.

pub mod embedded;
pub mod renderer;
