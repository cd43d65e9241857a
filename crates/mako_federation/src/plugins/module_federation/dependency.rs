use std::fmt;

/// Where an exposed dependency was declared, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLocation {
    pub name: String,
    pub index: usize,
}

impl fmt::Display for DependencyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposedDependency {
    pub exposed_name: String,
    pub user_request: String,
    pub ordinal: usize,
    pub loc: DependencyLocation,
}

impl ExposedDependency {
    pub fn new(exposed_name: &str, user_request: &str, ordinal: usize) -> Self {
        Self {
            exposed_name: exposed_name.to_string(),
            user_request: user_request.to_string(),
            ordinal,
            loc: DependencyLocation {
                name: exposed_name.to_string(),
                index: ordinal,
            },
        }
    }
}

/// One exposed module as an independently loadable unit. Chunk splitting
/// decides which chunks it ends up needing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncLoadBlock {
    dependency: ExposedDependency,
    request: String,
    chunk_name: Option<String>,
}

impl AsyncLoadBlock {
    pub fn new(dependency: ExposedDependency, chunk_name: Option<String>) -> Self {
        Self {
            request: dependency.user_request.clone(),
            dependency,
            chunk_name,
        }
    }

    pub fn dependency(&self) -> &ExposedDependency {
        &self.dependency
    }

    pub fn request(&self) -> &str {
        &self.request
    }

    pub fn chunk_name(&self) -> Option<&str> {
        self.chunk_name.as_deref()
    }
}
