pub mod config;
pub mod generate;
pub mod module;
pub mod module_graph;
pub mod plugins;
pub mod utils;

pub use generate::{
    CodeGenerationContext, GeneratedArtifact, ModuleGraphLookup, RuntimeGlobal,
    RuntimeRequirements, SourceType,
};
pub use plugins::module_federation::{
    AsyncLoadBlock, BuildError, BuildInfo, BuildOptions, ContainerEntryCache, ContainerEntryUnit,
    DependencyLocation, ExposedDependency, ExposureEntry, ExposureTable, ModuleFederationPlugin,
};
