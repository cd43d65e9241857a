use std::fmt;

#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ModuleId {
    pub id: String,
}

impl ModuleId {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self { id }
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ResolveType {
    Import,
    /// edge from a container entry to one of its exposed modules
    Exposed,
}

#[derive(Debug, Clone)]
pub struct Dependency {
    pub source: String,
    pub resolve_type: ResolveType,
    pub order: usize,
}

#[derive(Debug, Clone)]
pub struct Module {
    pub id: ModuleId,
    pub is_entry: bool,
}

impl Module {
    pub fn new(id: ModuleId, is_entry: bool) -> Self {
        Self { id, is_entry }
    }
}
