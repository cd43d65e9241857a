use crate::generate::chunk::ChunkId;
use crate::generate::chunk_graph::ChunkGraph;
use crate::module::ModuleId;
use crate::plugins::module_federation::AsyncLoadBlock;

pub const MAKO_REQUIRE: &str = "__mako_require__";

/// Quotes `value` as a JS string literal.
pub fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

pub fn to_comment(value: &str) -> String {
    if value.is_empty() {
        return "".to_string();
    }
    format!("/*! {} */", value.replace("*/", "*\\/"))
}

pub fn indent(code: &str) -> String {
    code.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("  {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Snippet builders code generation asks for. The chunk related ones depend
/// on how the compilation split its chunks.
pub trait RuntimeTemplate {
    /// Promise resolving once every chunk needed by `module_id` (reached
    /// through `block`) is loaded.
    fn block_promise(&self, block: &AsyncLoadBlock, module_id: &ModuleId) -> String;

    /// Expression evaluating `module_id` and returning its exports.
    fn module_raw(&self, module_id: &ModuleId, request: &str) -> String;

    fn throw_missing_module_error_block(&self, request: &str) -> String {
        format!(
            "var e = new Error({});\ne.code = 'MODULE_NOT_FOUND';\nthrow e;",
            js_string(&format!("Cannot find module '{}'", request))
        )
    }

    fn returning_function(&self, return_value: &str, args: &str) -> String {
        format!("({}) => ({})", args, return_value)
    }

    fn basic_function(&self, args: &str, body: &str) -> String {
        format!("({}) => {{\n{}\n}}", args, indent(body))
    }
}

pub struct MakoRuntimeTemplate<'a> {
    chunk_graph: &'a ChunkGraph,
}

impl<'a> MakoRuntimeTemplate<'a> {
    pub fn new(chunk_graph: &'a ChunkGraph) -> Self {
        Self { chunk_graph }
    }

    /// Chunks to ensure before `module_id` can be required, in load order.
    pub fn chunk_ids_for(&self, block: &AsyncLoadBlock, module_id: &ModuleId) -> Vec<ChunkId> {
        let chunk_graph = self.chunk_graph;
        let chunk = block
            .chunk_name()
            .and_then(|name| chunk_graph.get_async_chunk_by_name(name))
            .filter(|chunk| chunk.has_module(module_id))
            .or_else(|| chunk_graph.get_async_chunk_for_module(module_id));

        match chunk {
            Some(chunk) => [
                chunk_graph.sync_dependencies_chunk(&chunk.id),
                vec![chunk.id.clone()],
            ]
            .concat()
            .into_iter()
            // empty chunks are never emitted, initial ones are already there
            .filter(|chunk_id| {
                chunk_graph
                    .chunk(chunk_id)
                    .is_some_and(|c| !c.modules.is_empty() && !c.is_initial())
            })
            .collect(),
            // the module was merged into an entry chunk
            None => vec![],
        }
    }
}

fn require_ensure(chunk_id: &ChunkId) -> String {
    format!("{}.ensure({})", MAKO_REQUIRE, js_string(&chunk_id.id))
}

impl<'a> RuntimeTemplate for MakoRuntimeTemplate<'a> {
    fn block_promise(&self, block: &AsyncLoadBlock, module_id: &ModuleId) -> String {
        match self.chunk_ids_for(block, module_id).as_slice() {
            [] => "Promise.resolve()".to_string(),
            [chunk_id] => require_ensure(chunk_id),
            chunk_ids => format!(
                "Promise.all([{}])",
                chunk_ids
                    .iter()
                    .map(require_ensure)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }

    fn module_raw(&self, module_id: &ModuleId, request: &str) -> String {
        let comment = to_comment(request);
        if comment.is_empty() {
            format!("{}({})", MAKO_REQUIRE, js_string(&module_id.id))
        } else {
            format!("{}({} {})", MAKO_REQUIRE, comment, js_string(&module_id.id))
        }
    }
}
