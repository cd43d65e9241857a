use tracing_subscriber::{fmt, EnvFilter};

use crate::generate::chunk::{Chunk, ChunkType};
use crate::generate::chunk_graph::ChunkGraph;
use crate::generate::{
    CodeGenerationContext, GeneratedArtifact, MakoRuntimeTemplate, RuntimeRequirements,
};
use crate::module::{Dependency, Module, ModuleId, ResolveType};
use crate::module_graph::ModuleGraph;
use crate::plugins::module_federation::{
    BuildOptions, ContainerEntryUnit, ExposureEntry, ExposureTable,
};

pub fn setup_logger() {
    let _result = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub fn exposes(pairs: &[(&str, &str)]) -> ExposureTable {
    pairs
        .iter()
        .map(|(name, request)| ExposureEntry::new(name, request))
        .collect()
}

pub fn built_unit(pairs: &[(&str, &str)]) -> ContainerEntryUnit {
    setup_logger();
    let mut unit = ContainerEntryUnit::new("container", exposes(pairs));
    unit.build(&BuildOptions::default()).unwrap();
    unit
}

/// Resolves the listed requests of `unit`, each module in its own async chunk
/// named after the block. Other requests stay unresolved.
pub fn setup_graphs(
    unit: &ContainerEntryUnit,
    resolved: &[(&str, &str)],
) -> (ModuleGraph, ChunkGraph) {
    let mut module_graph = ModuleGraph::new();
    let mut chunk_graph = ChunkGraph::new();
    let container = unit.id();
    module_graph.add_module(Module::new(container.clone(), true));

    for block in unit.blocks() {
        let dependency = block.dependency();
        let Some((_, module)) = resolved
            .iter()
            .find(|(request, _)| *request == dependency.user_request)
        else {
            continue;
        };
        let module_id: ModuleId = (*module).into();
        if !module_graph.has_module(&module_id) {
            module_graph.add_module(Module::new(module_id.clone(), false));
        }
        module_graph.add_dependency(
            &container,
            &module_id,
            Dependency {
                source: dependency.user_request.clone(),
                resolve_type: ResolveType::Exposed,
                order: dependency.ordinal,
            },
        );
        if !chunk_graph.has_chunk(&module_id) {
            let mut chunk = Chunk::new(module_id.clone(), ChunkType::Async);
            if let Some(name) = block.chunk_name() {
                chunk = chunk.with_name(name);
            }
            chunk.add_module(module_id);
            chunk_graph.add_chunk(chunk);
        }
    }
    (module_graph, chunk_graph)
}

pub fn generate_code(
    unit: &ContainerEntryUnit,
    module_graph: &ModuleGraph,
    chunk_graph: &ChunkGraph,
) -> (GeneratedArtifact, RuntimeRequirements) {
    let template = MakoRuntimeTemplate::new(chunk_graph);
    let mut runtime_requirements = RuntimeRequirements::new();
    let mut context = CodeGenerationContext {
        module_graph,
        runtime_template: &template,
        runtime_requirements: &mut runtime_requirements,
    };
    let artifact = unit.generate(&mut context);
    (artifact, runtime_requirements)
}
