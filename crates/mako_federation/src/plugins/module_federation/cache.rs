use std::collections::HashMap;

use tracing::debug;

use super::container_entry::ContainerEntryUnit;

/// Container entries of past compilations, keyed by identifier. Handing in a
/// unit whose exposes did not change gives back the already built one.
///
/// The container name is not part of the key: two containers exposing the same
/// table share the unit inserted first, `name()` and `lib_ident()` included.
#[derive(Debug, Default)]
pub struct ContainerEntryCache {
    units: HashMap<String, ContainerEntryUnit>,
}

impl ContainerEntryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert(&mut self, unit: ContainerEntryUnit) -> &mut ContainerEntryUnit {
        let identifier = unit.identifier();
        if self.units.contains_key(&identifier) {
            debug!("reuse cached {}", unit.readable_identifier());
        }
        self.units.entry(identifier).or_insert(unit)
    }

    pub fn get(&self, identifier: &str) -> Option<&ContainerEntryUnit> {
        self.units.get(identifier)
    }

    pub fn remove(&mut self, identifier: &str) -> Option<ContainerEntryUnit> {
        self.units.remove(identifier)
    }

    pub fn invalidate_all(&mut self) {
        self.units.values_mut().for_each(|unit| unit.invalidate());
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
