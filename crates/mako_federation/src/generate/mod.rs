pub mod chunk;
pub mod chunk_graph;
pub mod runtime_template;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::module::ModuleId;
use crate::plugins::module_federation::ExposedDependency;
use crate::utils::md5_hash;
pub use runtime_template::{MakoRuntimeTemplate, RuntimeTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceType {
    /// executable script
    Javascript,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Javascript => "javascript",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pieces of shared runtime code a generated module relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuntimeGlobal {
    DefinePropertyGetters,
    Exports,
}

impl RuntimeGlobal {
    pub fn name(&self) -> &'static str {
        match self {
            RuntimeGlobal::DefinePropertyGetters => "define-property-getters",
            RuntimeGlobal::Exports => "exports-marker",
        }
    }

    /// The expression the generated code uses to reach this global.
    pub fn expr(&self) -> &'static str {
        match self {
            RuntimeGlobal::DefinePropertyGetters => "__mako_require__.d",
            RuntimeGlobal::Exports => "exports",
        }
    }
}

impl fmt::Display for RuntimeGlobal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeRequirements(BTreeSet<RuntimeGlobal>);

impl RuntimeRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, global: RuntimeGlobal) -> bool {
        self.0.insert(global)
    }

    pub fn extend(&mut self, other: &RuntimeRequirements) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn contains(&self, global: RuntimeGlobal) -> bool {
        self.0.contains(&global)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuntimeGlobal> {
        self.0.iter()
    }
}

impl FromIterator<RuntimeGlobal> for RuntimeRequirements {
    fn from_iter<T: IntoIterator<Item = RuntimeGlobal>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The module graph as seen by code generation.
pub trait ModuleGraphLookup {
    /// Module the `dependency` of `origin` currently resolves to, if any.
    fn module_for(&self, origin: &ModuleId, dependency: &ExposedDependency) -> Option<ModuleId>;
}

pub struct CodeGenerationContext<'a> {
    pub module_graph: &'a dyn ModuleGraphLookup,
    pub runtime_template: &'a dyn RuntimeTemplate,
    /// shared by every module of the compilation
    pub runtime_requirements: &'a mut RuntimeRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    sources: BTreeMap<SourceType, String>,
    runtime_requirements: RuntimeRequirements,
}

impl GeneratedArtifact {
    pub fn new(
        sources: BTreeMap<SourceType, String>,
        runtime_requirements: RuntimeRequirements,
    ) -> Self {
        Self {
            sources,
            runtime_requirements,
        }
    }

    pub fn source(&self, source_type: SourceType) -> Option<&str> {
        self.sources.get(&source_type).map(String::as_str)
    }

    pub fn sources(&self) -> &BTreeMap<SourceType, String> {
        &self.sources
    }

    pub fn runtime_requirements(&self) -> &RuntimeRequirements {
        &self.runtime_requirements
    }

    pub fn hash(&self) -> String {
        let content = self
            .sources
            .iter()
            .map(|(source_type, source)| format!("{}:{}", source_type, source))
            .collect::<Vec<_>>()
            .join("\n");
        md5_hash(&content, 32)
    }
}
