use std::collections::HashSet;

use anyhow::Result;
use tracing::warn;

use crate::config::ModuleFederationConfig;

mod cache;
mod constants;
mod container_entry;
mod dependency;
mod exposes;

pub use cache::ContainerEntryCache;
pub use container_entry::{BuildError, BuildInfo, BuildOptions, ContainerEntryUnit};
pub use dependency::{AsyncLoadBlock, DependencyLocation, ExposedDependency};
pub use exposes::{ExposureEntry, ExposureTable};

pub struct ModuleFederationPlugin {
    pub config: ModuleFederationConfig,
}

impl ModuleFederationPlugin {
    pub fn new(config: ModuleFederationConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &str {
        "module_federation"
    }

    /// The container entry for the configured exposes, if any. `entries` are
    /// the entry names already taken by the compilation.
    pub fn container_entry(&self, entries: &HashSet<String>) -> Result<Option<ContainerEntryUnit>> {
        let Some(exposes) = self.config.exposes.as_ref() else {
            return Ok(None);
        };
        if exposes.is_empty() {
            return Ok(None);
        }
        self.config.validate()?;

        let container_entry_name = &self.config.name;
        if entries.contains(container_entry_name) {
            warn!(
                "mf exposed name {} is conflicting with entry config.",
                container_entry_name
            );
            return Ok(None);
        }

        Ok(Some(ContainerEntryUnit::new(
            container_entry_name,
            exposes.to_table(),
        )))
    }
}
