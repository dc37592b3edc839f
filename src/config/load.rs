use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SliceConfig;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SliceConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SliceConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the input sheet path relative to the config file directory.
    pub fn resolve_input(&self) -> PathBuf {
        self.config_dir.join(&self.config.input)
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_paths_relative_to_config_dir() {
        let loaded = LoadedConfig {
            config: SliceConfig {
                input: "tt5.png".to_string(),
                output_dir: "tt5_emotions".to_string(),
                ..SliceConfig::default()
            },
            config_dir: PathBuf::from("/project/sheets"),
        };

        assert_eq!(
            loaded.resolve_input(),
            PathBuf::from("/project/sheets/tt5.png")
        );
        assert_eq!(
            loaded.resolve_output_dir(),
            PathBuf::from("/project/sheets/tt5_emotions")
        );
    }
}
