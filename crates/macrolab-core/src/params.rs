//! Sample template parameters and override merging.
//!
//! Klipper passes macro parameters at call time (`START_PRINT BED_TEMP=60`),
//! so a template rendered locally needs stand-in values. [`sample_params`]
//! provides a fixed set covering the common slicer-provided names; callers
//! can lay JSON overrides over it (inline string or file) and then build the
//! render context with [`build_context`].

use std::path::Path;

use serde_json::{json, Map, Value};

use crate::error::{MacrolabError, Result};

/// The built-in sample parameter set standing in for slicer-provided values.
pub fn sample_params() -> Map<String, Value> {
    let entries = [
        ("X", json!(5)),
        ("Y", json!(10)),
        ("LEN", json!(100)),
        ("LINE_HEIGHT", json!(0.2)),
        ("WIDTH", json!(0.45)),
        ("BED_TEMP", json!(60)),
        ("EXTRUDER_TEMP", json!(200)),
        ("FILAMENT", json!("PLA")),
        ("REPS", json!(3)),
        ("z_safety", json!(0.1)),
        ("z_offset", json!(0.0)),
        ("NOZZLE", json!(0.4)),
        ("FEED", json!(1000)),
    ];
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Parse `raw` as a JSON object and lay its entries over `params`.
///
/// Existing names are replaced, new names are added.
pub fn apply_overrides(params: &mut Map<String, Value>, raw: &str) -> Result<()> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|source| MacrolabError::ParamsParse { source })?;
    let Value::Object(overrides) = parsed else {
        return Err(MacrolabError::ParamsNotObject);
    };
    for (key, value) in overrides {
        params.insert(key, value);
    }
    Ok(())
}

/// Read a JSON file and lay its entries over `params` via [`apply_overrides`].
pub fn apply_overrides_file(params: &mut Map<String, Value>, path: &Path) -> Result<()> {
    let raw =
        std::fs::read_to_string(path).map_err(|source| MacrolabError::ParamsFileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
    apply_overrides(params, &raw)
}

/// Build the render context: the full map nested under `params` plus every
/// entry flattened to a top-level name.
///
/// Templates can write either `{{ params.BED_TEMP }}` (the Klipper way) or
/// plain `{{ BED_TEMP }}`. The flattened copies are inserted second, so a
/// parameter literally named `params` shadows the nested map.
pub fn build_context(params: &Map<String, Value>) -> Value {
    let mut ctx = Map::new();
    ctx.insert("params".to_string(), Value::Object(params.clone()));
    for (key, value) in params {
        ctx.insert(key.clone(), value.clone());
    }
    Value::Object(ctx)
}
