use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::plugins::module_federation::{ExposureEntry, ExposureTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleFederationConfig {
    pub name: String,
    #[serde(default)]
    pub exposes: Option<ExposesConfig>,
}

/// `{ "./add": "./src/add" }`, or a list when names may repeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExposesConfig {
    Map(IndexMap<String, ExposeItemConfig>),
    List(Vec<ExposeListItem>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExposeItemConfig {
    Import(String),
    Advanced(ExposeItemOptions),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposeItemOptions {
    pub import: String,
    /// chunk name of the exposed module, `name` in webpack style configs
    #[serde(default, alias = "name")]
    pub chunk_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposeListItem {
    pub name: String,
    pub import: String,
    #[serde(default)]
    pub chunk_name: Option<String>,
}

impl ExposesConfig {
    pub fn is_empty(&self) -> bool {
        match self {
            ExposesConfig::Map(map) => map.is_empty(),
            ExposesConfig::List(list) => list.is_empty(),
        }
    }

    pub fn to_table(&self) -> ExposureTable {
        match self {
            ExposesConfig::Map(map) => map
                .iter()
                .map(|(name, item)| match item {
                    ExposeItemConfig::Import(import) => ExposureEntry::new(name, import),
                    ExposeItemConfig::Advanced(options) => {
                        ExposureEntry::new(name, &options.import)
                            .with_chunk_name(options.chunk_name.clone())
                    }
                })
                .collect(),
            ExposesConfig::List(list) => list
                .iter()
                .map(|item| {
                    ExposureEntry::new(&item.name, &item.import)
                        .with_chunk_name(item.chunk_name.clone())
                })
                .collect(),
        }
    }
}
