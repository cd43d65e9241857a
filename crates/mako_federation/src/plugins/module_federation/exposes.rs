use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureEntry {
    pub name: String,
    pub request: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_name: Option<String>,
}

impl ExposureEntry {
    pub fn new(name: &str, request: &str) -> Self {
        Self {
            name: name.to_string(),
            request: request.to_string(),
            chunk_name: None,
        }
    }

    pub fn with_chunk_name(mut self, chunk_name: Option<String>) -> Self {
        self.chunk_name = chunk_name;
        self
    }
}

/// Ordered exposes of one container. Names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExposureTable(Vec<ExposureEntry>);

impl ExposureTable {
    pub fn new(entries: Vec<ExposureEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[ExposureEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExposureEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names declared more than once, in order of their second appearance.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = vec![];
        for entry in &self.0 {
            if !seen.insert(entry.name.as_str()) && !duplicates.contains(&entry.name.as_str()) {
                duplicates.push(entry.name.as_str());
            }
        }
        duplicates
    }
}

impl FromIterator<ExposureEntry> for ExposureTable {
    fn from_iter<T: IntoIterator<Item = ExposureEntry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExposureTable {
    type Item = &'a ExposureEntry;
    type IntoIter = std::slice::Iter<'a, ExposureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
