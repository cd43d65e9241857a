use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::constants::{
    CONTAINER_ENTRY_READABLE_IDENTIFIER, CONTAINER_ENTRY_SIZE, FEDERATION_CONTAINER_ENTRY_PREFIX,
    FEDERATION_EXPOSE_CHUNK_PREFIX,
};
use super::dependency::{AsyncLoadBlock, ExposedDependency};
use super::exposes::ExposureTable;
use crate::generate::runtime_template::{indent, js_string};
use crate::generate::{
    CodeGenerationContext, GeneratedArtifact, RuntimeGlobal, RuntimeRequirements, SourceType,
};
use crate::module::ModuleId;
use crate::utils::md5_hash;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("exposed module at index {index} has an empty name")]
    EmptyExposeName { index: usize },
    #[error("exposed module \"{name}\" has an empty request")]
    EmptyExposeRequest { name: String },
    #[error("exposed name \"{name}\" is declared more than once")]
    DuplicateExpose { name: String },
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// reject duplicated exposed names instead of letting the last one win
    pub strict_exposes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub hash: String,
    pub block_count: usize,
}

/// The synthetic module behind a federation container: one async block per
/// exposed module and a `get` function to load them by name at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerEntryUnit {
    name: String,
    exposes: ExposureTable,
    #[serde(skip)]
    blocks: Vec<AsyncLoadBlock>,
    #[serde(skip)]
    build_info: Option<BuildInfo>,
}

impl ContainerEntryUnit {
    pub fn new(name: &str, exposes: ExposureTable) -> Self {
        Self {
            name: name.to_string(),
            exposes,
            blocks: vec![],
            build_info: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exposes(&self) -> &ExposureTable {
        &self.exposes
    }

    pub fn blocks(&self) -> &[AsyncLoadBlock] {
        &self.blocks
    }

    pub fn build_info(&self) -> Option<&BuildInfo> {
        self.build_info.as_ref()
    }

    /// Derived from the exposes only, so equal tables share one graph node.
    pub fn identifier(&self) -> String {
        format!(
            "{} {}",
            CONTAINER_ENTRY_READABLE_IDENTIFIER,
            serde_json::to_string(&self.exposes).unwrap_or_default()
        )
    }

    pub fn readable_identifier(&self) -> &'static str {
        CONTAINER_ENTRY_READABLE_IDENTIFIER
    }

    pub fn lib_ident(&self) -> String {
        format!("{}{}", FEDERATION_CONTAINER_ENTRY_PREFIX, self.name)
    }

    pub fn id(&self) -> ModuleId {
        ModuleId::new(self.identifier())
    }

    pub fn source_types(&self) -> &'static [SourceType] {
        &[SourceType::Javascript]
    }

    pub fn size(&self, _source_type: Option<SourceType>) -> f64 {
        CONTAINER_ENTRY_SIZE
    }

    pub fn needs_rebuild(&self) -> bool {
        self.build_info.is_none()
    }

    pub fn invalidate(&mut self) {
        self.build_info = None;
    }

    pub fn build(&mut self, options: &BuildOptions) -> Result<(), BuildError> {
        debug!(
            "build {} {} with {} exposes",
            self.readable_identifier(),
            self.name,
            self.exposes.len()
        );
        self.blocks.clear();
        self.build_info = None;

        self.check_exposes(options)?;

        for (ordinal, entry) in self.exposes.iter().enumerate() {
            let dependency = ExposedDependency::new(&entry.name, &entry.request, ordinal);
            let chunk_name = entry
                .chunk_name
                .clone()
                .unwrap_or_else(|| expose_chunk_name(&entry.name));
            self.blocks
                .push(AsyncLoadBlock::new(dependency, Some(chunk_name)));
        }

        self.build_info = Some(BuildInfo {
            hash: md5_hash(&self.identifier(), 8),
            block_count: self.blocks.len(),
        });
        Ok(())
    }

    fn check_exposes(&self, options: &BuildOptions) -> Result<(), BuildError> {
        for (index, entry) in self.exposes.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(BuildError::EmptyExposeName { index });
            }
            if entry.request.is_empty() {
                return Err(BuildError::EmptyExposeRequest {
                    name: entry.name.clone(),
                });
            }
        }

        let duplicates = self.exposes.duplicate_names();
        if let (true, Some(name)) = (options.strict_exposes, duplicates.first()) {
            return Err(BuildError::DuplicateExpose {
                name: name.to_string(),
            });
        }
        for name in duplicates {
            warn!(
                "mf exposed name {} is declared more than once in container {}, the last one wins.",
                name, self.name
            );
        }
        Ok(())
    }

    /// Duplicated names get one getter each, in table order. The object literal
    /// keeps the first key's position with the last getter's value.
    pub fn generate(&self, context: &mut CodeGenerationContext) -> GeneratedArtifact {
        debug!("generate {} {}", self.readable_identifier(), self.name);
        let origin = self.id();
        let template = context.runtime_template;
        let module_graph = context.module_graph;

        let getters = self
            .blocks
            .iter()
            .map(|block| {
                let dependency = block.dependency();
                let body = match module_graph.module_for(&origin, dependency) {
                    Some(module_id) => {
                        let module_raw = template.module_raw(&module_id, &dependency.user_request);
                        // resolves to () => () => exports
                        let factory = template.returning_function(
                            &template.returning_function(
                                &template.returning_function(&module_raw, ""),
                                "",
                            ),
                            "",
                        );
                        format!(
                            "return {}.then({});",
                            template.block_promise(block, &module_id),
                            factory
                        )
                    }
                    None => {
                        warn!(
                            "mf exposed module {} at {} is not resolved",
                            dependency.user_request, dependency.loc
                        );
                        format!(
                            "return Promise.resolve().then({});",
                            template.basic_function(
                                "",
                                &template.throw_missing_module_error_block(&dependency.user_request)
                            )
                        )
                    }
                };
                format!(
                    "{}: {}",
                    js_string(&dependency.exposed_name),
                    template.basic_function("", &body)
                )
            })
            .collect::<Vec<_>>();

        let get = template.basic_function(
            "module",
            r#"return (
  Object.prototype.hasOwnProperty.call(moduleMap, module)
    ? moduleMap[module]()
    : Promise.reject(new Error('Module "' + module + '" does not exist in container.'))
);"#,
        );

        let source = format!(
            r#"var moduleMap = {{
{getters}
}};
var get = {get};
// This exports getters to disallow modifications
{define_property_getters}({exports}, {{
  get: {get_getter}
}});
"#,
            getters = indent(&getters.join(",\n")),
            get = get,
            define_property_getters = RuntimeGlobal::DefinePropertyGetters.expr(),
            exports = RuntimeGlobal::Exports.expr(),
            get_getter = template.returning_function("get", ""),
        );

        let runtime_requirements: RuntimeRequirements =
            [RuntimeGlobal::DefinePropertyGetters, RuntimeGlobal::Exports]
                .into_iter()
                .collect();
        context.runtime_requirements.extend(&runtime_requirements);

        GeneratedArtifact::new(
            BTreeMap::from([(SourceType::Javascript, source)]),
            runtime_requirements,
        )
    }
}

fn expose_chunk_name(name: &str) -> String {
    format!("{}{}", FEDERATION_EXPOSE_CHUNK_PREFIX, name.replace("./", ""))
}
