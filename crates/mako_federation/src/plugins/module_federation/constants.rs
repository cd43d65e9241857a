pub(crate) const FEDERATION_CONTAINER_ENTRY_PREFIX: &str = "mako/container/entry/";

pub(crate) const FEDERATION_EXPOSE_CHUNK_PREFIX: &str = "__mf_expose_";

pub(crate) const CONTAINER_ENTRY_READABLE_IDENTIFIER: &str = "container entry";

/// Nominal size reported for every container entry, whatever it exposes.
pub(crate) const CONTAINER_ENTRY_SIZE: f64 = 42.0;
