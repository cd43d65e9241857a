use std::fmt::{Debug, Formatter};

use hashlink::LinkedHashSet;

use crate::module::ModuleId;

pub type ChunkId = ModuleId;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ChunkType {
    /**
     * Entry(module_id, chunk_name), loaded with the page
     */
    Entry(ModuleId, String),
    Async,
    // not async itself, but a dependency of an async chunk
    Sync,
}

pub struct Chunk {
    pub id: ChunkId,
    pub name: Option<String>,
    pub chunk_type: ChunkType,
    pub modules: LinkedHashSet<ModuleId>,
}

impl Debug for Chunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}#{}({:?})",
            self.id.id,
            self.modules.len(),
            self.chunk_type
        )
    }
}

impl Chunk {
    pub fn new(id: ChunkId, chunk_type: ChunkType) -> Self {
        Self {
            modules: LinkedHashSet::new(),
            name: None,
            id,
            chunk_type,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn add_module(&mut self, module_id: ModuleId) {
        self.modules.insert(module_id);
    }

    pub fn has_module(&self, module_id: &ModuleId) -> bool {
        self.modules.contains(module_id)
    }

    /// Entry chunks are on the page before any exposed module is requested.
    pub fn is_initial(&self) -> bool {
        matches!(self.chunk_type, ChunkType::Entry(..))
    }
}
