//! Macro block extraction from Klipper-style config text.
//!
//! A config file declares macros as `[gcode_macro NAME]` sections whose
//! template payload sits in indented lines after a `gcode:` marker:
//!
//! ```text
//! [gcode_macro PURGE]
//! description: purge line before printing
//! gcode:
//!   G28
//!   G1 X{{ X }} F{{ FEED }}
//! ```
//!
//! [`extract_macros`] scans for every such section and returns the (name,
//! body) pairs in input order, with one level of leading indentation
//! stripped from each body line. It is a best-effort scan, not a validating
//! parser: malformed input never produces an error, only fewer matches.
//!
//! ```
//! use macrolab_core::extract::extract_macros;
//!
//! let blocks = extract_macros("[gcode_macro HOME]\ngcode:\n  G28\n");
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].name, "HOME");
//! assert_eq!(blocks[0].gcode, "G28");
//! ```

use serde::Serialize;

/// Token that opens a macro section header, matched case-insensitively on
/// the trimmed line.
pub const SECTION_PREFIX: &str = "[gcode_macro";

/// Token that introduces the indented template payload inside a section,
/// matched case-insensitively on the trimmed line.
pub const BODY_PREFIX: &str = "gcode:";

/// One extracted macro: its name and the de-indented template body.
///
/// Blocks are independent owned values; nothing borrows from the input
/// text, and a block is never mutated after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroBlock {
    /// Section name with original casing, brackets and whitespace trimmed.
    pub name: String,
    /// Body lines joined by `\n`; empty when the `gcode:` marker had no
    /// indented lines after it.
    pub gcode: String,
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn strip_indent(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
}

/// Extract every `[gcode_macro ...]` block from `text`, in input order.
///
/// For each section header the scan looks for a `gcode:` marker before the
/// next `[...]` header; sections without one are dropped without an error.
/// Body collection then takes blank lines (kept as empty strings) and
/// indented lines (leading spaces/tabs stripped) until the first non-blank
/// line at column zero, which is left for the outer scan to re-examine as a
/// potential next header.
///
/// Total over all inputs: cannot fail or panic, returns an empty vector
/// when nothing matches. One linear pass, O(n) in the line count.
pub fn extract_macros(text: &str) -> Vec<MacroBlock> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let header = lines[i].trim();
        if !starts_with_ignore_case(header, SECTION_PREFIX) {
            i += 1;
            continue;
        }

        // Prefix match guarantees the byte boundary is valid ASCII
        let name = header[SECTION_PREFIX.len()..]
            .trim()
            .trim_end_matches(']')
            .trim()
            .to_string();

        // Look for the body marker before the next section header
        let mut j = i + 1;
        let mut body_at = None;
        while j < lines.len() {
            let trimmed = lines[j].trim();
            if starts_with_ignore_case(trimmed, BODY_PREFIX) {
                body_at = Some(j);
                break;
            }
            if trimmed.starts_with('[') {
                // Next section begins; leave it for the outer scan
                break;
            }
            j += 1;
        }

        let Some(start) = body_at else {
            tracing::debug!("section '{name}' has no {BODY_PREFIX} marker, skipping");
            i = j;
            continue;
        };

        // Collect the indented payload after the marker line
        let mut body = Vec::new();
        let mut k = start + 1;
        while k < lines.len() {
            let line = lines[k];
            if line.trim().is_empty() {
                body.push("");
            } else if line.starts_with(' ') || line.starts_with('\t') {
                body.push(strip_indent(line));
            } else {
                break;
            }
            k += 1;
        }

        blocks.push(MacroBlock {
            name,
            gcode: body.join("\n"),
        });
        i = k;
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(extract_macros("").is_empty());
    }

    #[test]
    fn test_no_sections_at_all() {
        let blocks = extract_macros("G28\nG1 X0 Y0\nM84\n");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_single_macro() {
        let blocks = extract_macros("[gcode_macro X]\ngcode:\n  A\n  B\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "X");
        assert_eq!(blocks[0].gcode, "A\nB");
    }

    #[test]
    fn test_body_marker_with_no_lines_yields_empty_body() {
        let blocks = extract_macros("[gcode_macro EMPTY]\ngcode:\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "EMPTY");
        assert_eq!(blocks[0].gcode, "");
    }

    #[test]
    fn test_two_sections_in_input_order() {
        let input = "[gcode_macro A]\ngcode:\n  G28\n[gcode_macro B]\ngcode:\n  G1 X0\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "A");
        assert_eq!(blocks[0].gcode, "G28");
        assert_eq!(blocks[1].name, "B");
        assert_eq!(blocks[1].gcode, "G1 X0");
    }

    #[test]
    fn test_next_header_not_swallowed_by_body() {
        // Blank line between the first body and the second header: the
        // blank is body text, the header is not
        let input = "[gcode_macro A]\ngcode:\n  G28\n\n[gcode_macro B]\ngcode:\n  M84\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].gcode, "G28\n");
        assert_eq!(blocks[1].name, "B");
        assert_eq!(blocks[1].gcode, "M84");
    }

    #[test]
    fn test_section_without_body_marker_is_dropped() {
        let blocks = extract_macros("[gcode_macro A]\nvariable_x: 1\n");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_adjacent_headers_second_still_found() {
        let input = "[gcode_macro A]\n[gcode_macro B]\ngcode:\n  G28\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "B");
        assert_eq!(blocks[0].gcode, "G28");
    }

    #[test]
    fn test_unindented_line_terminates_body() {
        let input = "[gcode_macro A]\ngcode:\n  G28\nM117 done\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].gcode, "G28");
    }

    #[test]
    fn test_blank_lines_kept_as_empty_strings() {
        let input = "[gcode_macro A]\ngcode:\n  G28\n\n  G1\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks[0].gcode, "G28\n\nG1");
    }

    #[test]
    fn test_mixed_tabs_and_spaces_indentation() {
        let input = "[gcode_macro A]\ngcode:\n \tG28\n\t  G1 X0\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks[0].gcode, "G28\nG1 X0");
    }

    #[test]
    fn test_internal_whitespace_preserved() {
        let input = "[gcode_macro A]\ngcode:\n  G1  X0   ; park\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks[0].gcode, "G1  X0   ; park");
    }

    #[test]
    fn test_case_insensitive_markers_preserve_name_case() {
        let blocks = extract_macros("[GCODE_MACRO Home_All]\nGCODE:\n  G28\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "Home_All");
    }

    #[test]
    fn test_name_trimming_and_brackets() {
        let blocks = extract_macros("[gcode_macro   SPACED_NAME  ]\ngcode:\n  G28\n");
        assert_eq!(blocks[0].name, "SPACED_NAME");
    }

    #[test]
    fn test_non_macro_section_aborts_body_search() {
        // The gcode: line belongs to [printer], which is not a macro section
        let input = "[gcode_macro A]\n[printer]\ngcode:\n  G28\n";
        let blocks = extract_macros(input);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_body_marker_same_line_payload_ignored() {
        let input = "[gcode_macro A]\ngcode: G28 inline\n  G1\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].gcode, "G1");
    }

    #[test]
    fn test_indented_pseudo_header_stays_in_body() {
        // Indented marker lines are consumed as body text and never
        // re-examined, so no second block appears
        let input = "[gcode_macro A]\ngcode:\n  [gcode_macro FAKE]\n  gcode:\n  M84\n";
        let blocks = extract_macros(input);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "A");
        assert_eq!(blocks[0].gcode, "[gcode_macro FAKE]\ngcode:\nM84");
    }

    #[test]
    fn test_indented_header_recognized_by_outer_scan() {
        // Headers are matched on the trimmed line when the outer scan
        // reaches them directly
        let blocks = extract_macros("  [gcode_macro A]\ngcode:\n  G28\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "A");
        assert_eq!(blocks[0].gcode, "G28");
    }

    #[test]
    fn test_crlf_input() {
        let blocks = extract_macros("[gcode_macro X]\r\ngcode:\r\n  A\r\n  B\r\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].gcode, "A\nB");
    }

    #[test]
    fn test_header_at_end_of_input_dropped() {
        assert!(extract_macros("[gcode_macro LAST]").is_empty());
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let input = "[gcode_macro A]\ngcode:\n  G28\n[gcode_macro B]\ngcode:\n  M84\n";
        assert_eq!(extract_macros(input), extract_macros(input));
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let blocks = extract_macros("[gcode_macro Ü]\ngcode:\n  M117 héllo\n日本語\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "Ü");
        assert_eq!(blocks[0].gcode, "M117 héllo");
    }
}
