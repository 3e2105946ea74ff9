use std::path::Path;

use anyhow::{Context, Result};

use macrolab_core::extract;

use crate::output;

/// List the macro blocks found in a config file.
///
/// Text mode prints one row per block with its body line count. With
/// `--json` the blocks come out as a pretty-printed JSON array and nothing
/// else, so the output can be piped into other tools.
pub fn run(file: &Path, json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let blocks = extract::extract_macros(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    output::print_header("macrolab list");
    output::print_key_value("File", &file.display().to_string());

    if blocks.is_empty() {
        output::print_warning("no macro sections found");
        return Ok(());
    }

    for block in &blocks {
        let lines = block.gcode.lines().count();
        output::print_key_value(&block.name, &format!("{lines} line(s)"));
    }
    output::print_success(&format!("{} macro block(s) found", blocks.len()));

    Ok(())
}
