use std::collections::HashSet;

use mako_federation::config::ModuleFederationConfig;
use mako_federation::generate::chunk::{Chunk, ChunkType};
use mako_federation::generate::chunk_graph::ChunkGraph;
use mako_federation::generate::MakoRuntimeTemplate;
use mako_federation::module::{Dependency, Module, ResolveType};
use mako_federation::module_graph::ModuleGraph;
use mako_federation::{
    BuildOptions, CodeGenerationContext, ContainerEntryCache, ContainerEntryUnit,
    ModuleFederationPlugin, RuntimeGlobal, RuntimeRequirements, SourceType,
};

fn container_from(config: &str) -> ContainerEntryUnit {
    let config = ModuleFederationConfig::from_json(config).unwrap();
    ModuleFederationPlugin::new(config)
        .container_entry(&HashSet::new())
        .unwrap()
        .unwrap()
}

/// Links `request` of the container to `module`, placed in an async chunk.
fn link(
    unit: &ContainerEntryUnit,
    module_graph: &mut ModuleGraph,
    chunk_graph: &mut ChunkGraph,
    request: &str,
    module: &str,
) {
    let container = unit.id();
    if !module_graph.has_module(&container) {
        module_graph.add_module(Module::new(container.clone(), true));
    }
    let block = unit
        .blocks()
        .iter()
        .find(|block| block.request() == request)
        .unwrap();
    module_graph.add_module(Module::new(module.into(), false));
    module_graph.add_dependency(
        &container,
        &module.into(),
        Dependency {
            source: request.to_string(),
            resolve_type: ResolveType::Exposed,
            order: block.dependency().ordinal,
        },
    );
    let mut chunk = Chunk::new(module.into(), ChunkType::Async);
    chunk.add_module(module.into());
    chunk_graph.add_chunk(chunk);
}

fn generate(
    unit: &ContainerEntryUnit,
    module_graph: &ModuleGraph,
    chunk_graph: &ChunkGraph,
    runtime_requirements: &mut RuntimeRequirements,
) -> String {
    let template = MakoRuntimeTemplate::new(chunk_graph);
    let mut context = CodeGenerationContext {
        module_graph,
        runtime_template: &template,
        runtime_requirements,
    };
    let artifact = unit.generate(&mut context);
    artifact
        .source(SourceType::Javascript)
        .unwrap()
        .to_string()
}

#[test]
fn resolvable_exposes() {
    let mut unit = container_from(
        r#"{ "name": "math", "exposes": { "add": "./math/add", "sub": "./math/sub" } }"#,
    );
    unit.build(&BuildOptions::default()).unwrap();

    let mut module_graph = ModuleGraph::new();
    let mut chunk_graph = ChunkGraph::new();
    link(&unit, &mut module_graph, &mut chunk_graph, "./math/add", "/src/math/add.js");
    link(&unit, &mut module_graph, &mut chunk_graph, "./math/sub", "/src/math/sub.js");

    let mut runtime_requirements = RuntimeRequirements::new();
    let code = generate(&unit, &module_graph, &chunk_graph, &mut runtime_requirements);

    assert_eq!(code.matches(": () => {\n    return ").count(), 2);
    assert!(code.contains(
        r#"  "add": () => {
    return __mako_require__.ensure("/src/math/add.js").then(() => (() => (() => (__mako_require__(/*! ./math/add */ "/src/math/add.js")))));
  },
  "sub": () => {
    return __mako_require__.ensure("/src/math/sub.js").then(() => (() => (() => (__mako_require__(/*! ./math/sub */ "/src/math/sub.js")))));
  }
};"#
    ));
    assert!(code.contains("Object.prototype.hasOwnProperty.call(moduleMap, module)"));
    assert!(code.contains(
        r#"Promise.reject(new Error('Module "' + module + '" does not exist in container.'))"#
    ));
    assert!(code.contains("__mako_require__.d(exports, {\n  get: () => (get)\n});"));
    assert!(!code.contains("Cannot find module"));
}

#[test]
fn unresolvable_expose() {
    let mut unit = container_from(r#"{ "name": "broken", "exposes": { "x": "./missing" } }"#);
    unit.build(&BuildOptions::default()).unwrap();

    let module_graph = ModuleGraph::new();
    let chunk_graph = ChunkGraph::new();
    let mut runtime_requirements = RuntimeRequirements::new();
    let code = generate(&unit, &module_graph, &chunk_graph, &mut runtime_requirements);

    assert!(code.contains(r#""x": () => {"#));
    assert!(code.contains(r#"var e = new Error("Cannot find module './missing'");"#));
    assert!(code.contains("e.code = 'MODULE_NOT_FOUND';"));
}

#[test]
fn runtime_requirements_accumulate_across_units() {
    let mut runtime_requirements = RuntimeRequirements::new();
    let module_graph = ModuleGraph::new();
    let chunk_graph = ChunkGraph::new();

    for config in [
        r#"{ "name": "a", "exposes": { "x": "./x" } }"#,
        r#"{ "name": "b", "exposes": [{ "name": "y", "import": "./y" }] }"#,
    ] {
        let mut unit = container_from(config);
        unit.build(&BuildOptions::default()).unwrap();
        generate(&unit, &module_graph, &chunk_graph, &mut runtime_requirements);
    }

    assert_eq!(runtime_requirements.len(), 2);
    assert!(runtime_requirements.contains(RuntimeGlobal::DefinePropertyGetters));
    assert!(runtime_requirements.contains(RuntimeGlobal::Exports));
}

#[test]
fn incremental_rebuild_reuses_unit() {
    let config = r#"{ "name": "math", "exposes": { "add": "./math/add" } }"#;
    let mut cache = ContainerEntryCache::new();

    let unit = cache.get_or_insert(container_from(config));
    assert!(unit.needs_rebuild());
    unit.build(&BuildOptions::default()).unwrap();

    // next compilation, same config
    let unit = cache.get_or_insert(container_from(config));
    assert!(!unit.needs_rebuild());
    assert_eq!(unit.blocks().len(), 1);
}
