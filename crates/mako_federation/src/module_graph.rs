use std::collections::HashMap;

use petgraph::graph::{DefaultIx, NodeIndex};
use petgraph::stable_graph::{StableDiGraph, WalkNeighbors};
use petgraph::Direction;

use crate::generate::ModuleGraphLookup;
use crate::module::{Dependency, Module, ModuleId, ResolveType};
use crate::plugins::module_federation::ExposedDependency;

pub struct ModuleGraph {
    id_index_map: HashMap<ModuleId, NodeIndex<DefaultIx>>,
    pub graph: StableDiGraph<Module, Dependency>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self {
            id_index_map: HashMap::new(),
            graph: StableDiGraph::new(),
        }
    }

    pub fn add_module(&mut self, module: Module) {
        let id_for_map = module.id.clone();
        let idx = self.graph.add_node(module);
        self.id_index_map.insert(id_for_map, idx);
    }

    pub fn has_module(&self, module_id: &ModuleId) -> bool {
        self.id_index_map.contains_key(module_id)
    }

    /// Several exposes may point at the same module, so parallel edges are kept.
    pub fn add_dependency(&mut self, from: &ModuleId, to: &ModuleId, edge: Dependency) {
        let from = self
            .id_index_map
            .get(from)
            .unwrap_or_else(|| panic!("module_id {:?} not found in the module graph", from));
        let to = self
            .id_index_map
            .get(to)
            .unwrap_or_else(|| panic!("module_id {:?} not found in the module graph", to));
        self.graph.add_edge(*from, *to, edge);
    }

    fn get_edges(&self, module_id: &ModuleId, direction: Direction) -> WalkNeighbors<u32> {
        let i = self
            .id_index_map
            .get(module_id)
            .unwrap_or_else(|| panic!("module_id {:?} not found in the module graph", module_id));
        self.graph.neighbors_directed(*i, direction).detach()
    }

    pub fn get_dependencies(&self, module_id: &ModuleId) -> Vec<(&ModuleId, &Dependency)> {
        let mut edges = self.get_edges(module_id, Direction::Outgoing);
        let mut deps: Vec<(&ModuleId, &Dependency)> = vec![];
        while let Some((edge_index, node_index)) = edges.next(&self.graph) {
            if let (Some(dependency), Some(module)) = (
                self.graph.edge_weight(edge_index),
                self.graph.node_weight(node_index),
            ) {
                deps.push((&module.id, dependency));
            }
        }
        deps.sort_by_key(|(_, dep)| dep.order);
        deps
    }
}

impl ModuleGraphLookup for ModuleGraph {
    fn module_for(&self, origin: &ModuleId, dependency: &ExposedDependency) -> Option<ModuleId> {
        if !self.has_module(origin) {
            return None;
        }
        self.get_dependencies(origin)
            .into_iter()
            .find(|(_, dep)| {
                dep.resolve_type == ResolveType::Exposed
                    && dep.order == dependency.ordinal
                    && dep.source == dependency.user_request
            })
            .map(|(module_id, _)| module_id.clone())
    }
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new()
    }
}
