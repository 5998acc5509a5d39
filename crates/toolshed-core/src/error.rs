/// Core error type for the toolshed system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("tool execution failed: {0}")]
    Execution(String),

    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),
}
