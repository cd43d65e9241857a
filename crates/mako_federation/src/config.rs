mod module_federation;

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
pub use module_federation::{
    ExposeItemConfig, ExposeItemOptions, ExposeListItem, ExposesConfig, ModuleFederationConfig,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("module federation name must not be empty")]
    EmptyName,
    #[error("exposed module at index {index} has an empty name")]
    EmptyExposeName { index: usize },
    #[error("exposed module \"{name}\" has an empty import")]
    EmptyExposeImport { name: String },
}

impl ModuleFederationConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| anyhow!("Config Error invalid module federation config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Config Error failed to read {}: {}", path.display(), e))?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if let Some(exposes) = &self.exposes {
            for (index, entry) in exposes.to_table().iter().enumerate() {
                if entry.name.is_empty() {
                    return Err(ConfigError::EmptyExposeName { index });
                }
                if entry.request.is_empty() {
                    return Err(ConfigError::EmptyExposeImport {
                        name: entry.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
