use async_trait::async_trait;
use serde_json::Value;

use toolshed_core::{Error, Schema, Tool};

/// Tool that fails on every invocation, for exercising the error mapping.
pub struct FailingTool;

#[async_trait]
impl Tool for FailingTool {
    fn name(&self) -> &str {
        "always_fails"
    }

    fn description(&self) -> &str {
        "fails on every invocation"
    }

    fn schema(&self) -> Schema {
        Schema::object(vec![], &[])
    }

    async fn execute(&self, _parameters: Value) -> Result<String, Error> {
        Err(Error::Execution("upstream dependency failed".to_string()))
    }
}
