use std::collections::HashMap;

use petgraph::stable_graph::{DefaultIx, NodeIndex, StableDiGraph};
use petgraph::Direction;

use crate::generate::chunk::{Chunk, ChunkId, ChunkType};
use crate::module::ModuleId;

pub struct ChunkGraph {
    pub(crate) graph: StableDiGraph<Chunk, ()>,
    id_index_map: HashMap<ChunkId, NodeIndex<DefaultIx>>,
}

impl ChunkGraph {
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            id_index_map: HashMap::new(),
        }
    }

    pub fn add_chunk(&mut self, chunk: Chunk) {
        let chunk_id = chunk.id.clone();
        let node_index = self.graph.add_node(chunk);
        self.id_index_map.insert(chunk_id, node_index);
    }

    pub fn has_chunk(&self, chunk_id: &ChunkId) -> bool {
        self.id_index_map.contains_key(chunk_id)
    }

    pub fn chunk(&self, chunk_id: &ChunkId) -> Option<&Chunk> {
        self.id_index_map
            .get(chunk_id)
            .and_then(|idx| self.graph.node_weight(*idx))
    }

    pub fn get_async_chunk_for_module(&self, module_id: &ModuleId) -> Option<&Chunk> {
        self.graph
            .node_weights()
            .find(|c| c.has_module(module_id) && matches!(c.chunk_type, ChunkType::Async))
    }

    pub fn get_async_chunk_by_name(&self, name: &str) -> Option<&Chunk> {
        self.graph.node_weights().find(|c| {
            matches!(c.chunk_type, ChunkType::Async) && c.name.as_deref() == Some(name)
        })
    }

    /// Returns false when either chunk is not in the graph.
    pub fn add_edge(&mut self, from: &ChunkId, to: &ChunkId) -> bool {
        match (self.id_index_map.get(from), self.id_index_map.get(to)) {
            (Some(from), Some(to)) => {
                self.graph.add_edge(*from, *to, ());
                true
            }
            _ => false,
        }
    }

    pub fn sync_dependencies_chunk(&self, chunk_id: &ChunkId) -> Vec<ChunkId> {
        let Some(idx) = self.id_index_map.get(chunk_id) else {
            return vec![];
        };
        let ret = self
            .graph
            .neighbors_directed(*idx, Direction::Outgoing)
            .filter(|idx| matches!(self.graph[*idx].chunk_type, ChunkType::Sync))
            .map(|idx| self.graph[idx].id.clone())
            .collect::<Vec<ChunkId>>();
        // petgraph yields neighbors in reverse insertion order
        ret.into_iter().rev().collect()
    }
}

impl Default for ChunkGraph {
    fn default() -> Self {
        Self::new()
    }
}
