use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk CLI configuration (TOML), read from the XDG config dir.
///
/// Everything is optional; a missing file means defaults throughout.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StudylogConfig {
    #[serde(default)]
    pub data: DataSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DataSection {
    /// Data directory holding the stored collections and logs
    pub dir: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<StudylogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("studylog"));
        }
    }
    Ok(home_dir()?.join(".config").join("studylog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("studylog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("studylog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
