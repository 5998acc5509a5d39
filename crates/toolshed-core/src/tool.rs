use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::schema::Schema;
use crate::types::ToolDefinition;

/// A named, schema-described callable exposed to an external orchestrator.
///
/// Implementations decode `parameters` into their own typed struct at the
/// boundary rather than working over untyped maps, and are responsible for
/// the safety of any I/O they perform. The registry validates parameters
/// against [`Tool::schema`] before `execute` is ever called.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the tool is registered and invoked under.
    fn name(&self) -> &str;

    /// Human-readable description shown to the orchestrator.
    fn description(&self) -> &str;

    /// Schema of the accepted parameters.
    fn schema(&self) -> Schema;

    /// Run the tool over already-validated parameters.
    ///
    /// # Errors
    ///
    /// Tool-specific failures surface as [`Error::Execution`].
    async fn execute(&self, parameters: Value) -> Result<String, Error>;

    /// The definition advertised for this tool.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            schema: self.schema(),
        }
    }
}
