use std::path::Path;

use anyhow::{Context, Result};

use super::types::SliceConfig;

/// Save a config to a JSON file with pretty formatting.
///
/// Used by `grid --emit-config` to turn an even split into an explicit-rect
/// config that can be hand-tuned region by region.
pub fn save_config(config: &SliceConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .with_context(|| "failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}
