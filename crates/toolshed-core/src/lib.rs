pub mod error;
pub mod registry;
pub mod schema;
pub mod tool;
pub mod types;

pub use error::Error;
pub use registry::Registry;
pub use schema::{DataType, Schema};
pub use tool::Tool;
pub use types::{InvocationRequest, InvocationResult, ToolDefinition};
