//! tj-config: engine configuration file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{EngineConfig, SizingParams, ValidationError, validate};

use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn read_yaml(path: &Path) -> ConfigResult<EngineConfigDef> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

fn read_json(path: &Path) -> ConfigResult<EngineConfigDef> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_yaml(path: &Path) -> ConfigResult<EngineConfigDef> {
    let def = read_yaml(path)?;
    validate(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &Path, def: &EngineConfigDef) -> ConfigResult<()> {
    validate(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ConfigResult<EngineConfigDef> {
    let def = read_json(path)?;
    validate(&def)?;
    Ok(def)
}

pub fn save_json(path: &Path, def: &EngineConfigDef) -> ConfigResult<()> {
    validate(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a YAML or JSON file, chosen by extension, and validate it.
pub fn load(path: &Path) -> ConfigResult<EngineConfig> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let def = match ext.as_deref() {
        Some("yaml") | Some("yml") => read_yaml(path)?,
        Some("json") => read_json(path)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(validate(&def)?)
}
