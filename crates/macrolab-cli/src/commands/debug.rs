use std::path::Path;

use anyhow::{Context, Result};

use macrolab_core::params;
use macrolab_core::templates::embedded;
use macrolab_core::templates::renderer::TemplateRenderer;

use crate::output;

/// Run templates through the debug harness and print intermediate values.
///
/// Without `--template`, runs the built-in START_PRINT and END_PRINT
/// sequences; with it, runs the given file instead. Rendering is lenient
/// (unset variables come out empty) since the built-in templates guard
/// every parameter access with `|default(...)`. The command exits
/// successfully even when a template fails; the summary shows what broke.
pub fn run(template: Option<&Path>) -> Result<()> {
    output::print_header("macrolab debug");

    let custom;
    let templates: Vec<(&str, &str)> = match template {
        Some(path) => {
            custom = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            vec![("custom", custom.as_str())]
        }
        None => vec![
            ("START_PRINT", embedded::START_PRINT_DEBUG),
            ("END_PRINT", embedded::END_PRINT_DEBUG),
        ],
    };

    let renderer = TemplateRenderer::lenient();
    let ctx = params::build_context(&params::sample_params());

    let mut results = Vec::new();
    for (name, source) in templates {
        output::print_header(&format!("template: {name}"));
        match renderer.render(source, &ctx) {
            Ok(text) => {
                println!("{text}");
                results.push((name, true));
            }
            Err(err) => {
                output::print_error(&err.to_string());
                results.push((name, false));
            }
        }
    }

    output::print_header("summary");
    for (name, passed) in &results {
        output::print_pass_fail(name, *passed);
    }
    if results.iter().all(|(_, passed)| *passed) {
        output::print_success("all templates rendered");
    } else {
        output::print_warning("some templates failed, check the errors above");
    }

    Ok(())
}
