//! Per-block rendering and report assembly.
//!
//! Every extracted block is rendered against the same context; one block's
//! failure never prevents attempting the others. The outcome of each block
//! is kept, success or classified error, and [`format_report`] turns the
//! whole batch into the concatenated human-labeled report.

use serde_json::Value;

use crate::error::Result;
use crate::extract::MacroBlock;
use crate::templates::renderer::TemplateRenderer;

const RULE_WIDTH: usize = 70;

/// Outcome of rendering one macro block.
#[derive(Debug)]
pub struct RenderedMacro {
    pub name: String,
    pub result: Result<String>,
}

/// Render every block against `ctx`, keeping per-block outcomes.
pub fn render_all(
    renderer: &TemplateRenderer,
    blocks: &[MacroBlock],
    ctx: &Value,
) -> Vec<RenderedMacro> {
    blocks
        .iter()
        .map(|block| RenderedMacro {
            name: block.name.clone(),
            result: renderer.render(&block.gcode, ctx),
        })
        .collect()
}

/// Number of blocks whose rendering failed.
pub fn failure_count(rendered: &[RenderedMacro]) -> usize {
    rendered.iter().filter(|unit| unit.result.is_err()).count()
}

/// Format the batch as a plain-text report: each block under a ruled
/// `[gcode_macro NAME]` banner, failures as an `[ERROR]` line plus the
/// classified message.
///
/// No ANSI styling here; the report may be written to a file.
pub fn format_report(rendered: &[RenderedMacro]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    for unit in rendered {
        lines.push(format!("\n{rule}"));
        lines.push(format!("[gcode_macro {}]", unit.name));
        lines.push(format!("{rule}\n"));

        match &unit.result {
            Ok(text) => {
                lines.push(text.clone());
                lines.push(String::new());
            }
            Err(err) => {
                lines.push(format!("[ERROR] rendering '{}' failed:", unit.name));
                lines.push(err.to_string());
                lines.push(String::new());
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MacrolabError;
    use serde_json::json;

    fn block(name: &str, gcode: &str) -> MacroBlock {
        MacroBlock {
            name: name.to_string(),
            gcode: gcode.to_string(),
        }
    }

    #[test]
    fn test_one_failure_does_not_stop_the_others() {
        let renderer = TemplateRenderer::new();
        let blocks = vec![
            block("A", "G1 X{{ X }}"),
            block("B", "{{ missing }}"),
            block("C", "M84"),
        ];
        let rendered = render_all(&renderer, &blocks, &json!({"X": 5}));

        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].result.as_deref().unwrap(), "G1 X5");
        assert!(matches!(
            rendered[1].result,
            Err(MacrolabError::UndefinedVariable(_))
        ));
        assert_eq!(rendered[2].result.as_deref().unwrap(), "M84");
        assert_eq!(failure_count(&rendered), 1);
    }

    #[test]
    fn test_report_headers_in_input_order() {
        let renderer = TemplateRenderer::new();
        let blocks = vec![block("FIRST", "G28"), block("SECOND", "M84")];
        let rendered = render_all(&renderer, &blocks, &json!({}));
        let report = format_report(&rendered);

        assert!(report.contains(&"=".repeat(70)));
        let first = report.find("[gcode_macro FIRST]").unwrap();
        let second = report.find("[gcode_macro SECOND]").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_report_embeds_classified_error() {
        let renderer = TemplateRenderer::new();
        let blocks = vec![block("BROKEN", "{{ nope }}")];
        let rendered = render_all(&renderer, &blocks, &json!({}));
        let report = format_report(&rendered);

        assert!(report.contains("[ERROR] rendering 'BROKEN' failed:"));
        assert!(report.contains("undefined template variable"));
    }

    #[test]
    fn test_failure_count_zero_when_all_render() {
        let renderer = TemplateRenderer::new();
        let blocks = vec![block("A", "G28"), block("B", "M84")];
        let rendered = render_all(&renderer, &blocks, &json!({}));
        assert_eq!(failure_count(&rendered), 0);
    }
}
