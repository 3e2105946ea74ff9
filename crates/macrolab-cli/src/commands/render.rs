use std::path::Path;

use anyhow::{Context, Result};

use macrolab_core::extract::{self, MacroBlock};
use macrolab_core::params;
use macrolab_core::report;
use macrolab_core::templates::embedded;
use macrolab_core::templates::renderer::TemplateRenderer;

use crate::output;

/// Render every macro block from a config file (or the built-in example).
///
/// Extracts `[gcode_macro ...]` blocks from the input, merges parameter
/// overrides over the sample set, and renders each block under strict
/// undefined behavior. The concatenated report goes to stdout or `--out`.
/// Per-block rendering failures land inside the report and are counted in
/// a closing warning; they never abort the remaining blocks or fail the
/// process.
pub fn run(
    file: Option<&Path>,
    out: Option<&Path>,
    params_json: Option<&str>,
    params_file: Option<&Path>,
) -> Result<()> {
    output::print_header("macrolab render");

    let blocks = match file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let blocks = extract::extract_macros(&raw);
            if blocks.is_empty() {
                // No macro sections: treat the whole file as one template
                output::print_warning("no macro sections found, rendering the whole file");
                vec![MacroBlock {
                    name: "generic".to_string(),
                    gcode: raw,
                }]
            } else {
                blocks
            }
        }
        None => vec![MacroBlock {
            name: "example".to_string(),
            gcode: embedded::DEFAULT_TEMPLATE.to_string(),
        }],
    };

    output::print_key_value("Blocks", &blocks.len().to_string());

    let mut params = params::sample_params();
    if let Some(path) = params_file {
        params::apply_overrides_file(&mut params, path)?;
    }
    if let Some(raw) = params_json {
        params::apply_overrides(&mut params, raw)?;
    }
    tracing::debug!("render context ready with {} parameters", params.len());
    let ctx = params::build_context(&params);

    let renderer = TemplateRenderer::new();
    let rendered = report::render_all(&renderer, &blocks, &ctx);
    let failures = report::failure_count(&rendered);
    let full_report = report::format_report(&rendered);

    match out {
        Some(path) => {
            std::fs::write(path, &full_report)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!("Rendered report saved to {}", path.display()));
        }
        None => println!("{full_report}"),
    }

    if failures > 0 {
        output::print_warning(&format!(
            "{failures} of {} block(s) failed to render",
            rendered.len()
        ));
    }

    Ok(())
}
