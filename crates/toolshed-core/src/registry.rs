use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Error;
use crate::tool::Tool;
use crate::types::{InvocationRequest, InvocationResult, ToolDefinition};

/// Immutable, ordered collection of tools keyed by unique name.
///
/// Built once at process start and shared read-only afterwards, so
/// concurrent invocations need no locking. Individual tools own the safety
/// of whatever I/O they perform.
pub struct Registry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from tools in advertisement order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTool`] when two tools share a name.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self, Error> {
        let mut index = HashMap::with_capacity(tools.len());

        for (position, tool) in tools.iter().enumerate() {
            if index.insert(tool.name().to_string(), position).is_some() {
                return Err(Error::DuplicateTool(tool.name().to_string()));
            }
        }

        Ok(Self { tools, index })
    }

    /// All registered definitions, in registration order.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| tool.definition()).collect()
    }

    /// Look up a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// Execute one invocation: resolve the tool, decode and validate its
    /// parameters, then dispatch.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTool`] when no tool matches the requested name,
    /// [`Error::InvalidParameters`] when the parameter text is not JSON or
    /// violates the tool's schema, and [`Error::Execution`] when the tool
    /// itself fails. The registry stays usable after any failure.
    pub async fn execute(&self, request: &InvocationRequest) -> Result<InvocationResult, Error> {
        let tool = self
            .get(&request.name)
            .ok_or_else(|| Error::UnknownTool(request.name.clone()))?;

        let parameters: Value = serde_json::from_str(&request.parameters)
            .map_err(|error| Error::InvalidParameters(error.to_string()))?;

        tool.schema()
            .validate(&parameters)
            .map_err(Error::InvalidParameters)?;

        let data = tool.execute(parameters).await?;

        Ok(InvocationResult { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use async_trait::async_trait;

    struct GreetTool;

    #[async_trait]
    impl Tool for GreetTool {
        fn name(&self) -> &str {
            "greet"
        }

        fn description(&self) -> &str {
            "greet someone by name"
        }

        fn schema(&self) -> Schema {
            Schema::object(vec![("who", Schema::string())], &["who"])
        }

        async fn execute(&self, parameters: Value) -> Result<String, Error> {
            let who = parameters["who"].as_str().unwrap_or_default();
            Ok(format!("hello, {who}"))
        }
    }

    struct BrokenTool;

    #[async_trait]
    impl Tool for BrokenTool {
        fn name(&self) -> &str {
            "broken"
        }

        fn description(&self) -> &str {
            "always fails"
        }

        fn schema(&self) -> Schema {
            Schema::object(vec![], &[])
        }

        async fn execute(&self, _parameters: Value) -> Result<String, Error> {
            Err(Error::Execution("upstream dependency failed".to_string()))
        }
    }

    fn registry() -> Registry {
        Registry::new(vec![
            Arc::new(GreetTool) as Arc<dyn Tool>,
            Arc::new(BrokenTool),
        ])
        .unwrap()
    }

    #[test]
    fn definitions_keep_registration_order() {
        let names: Vec<String> = registry()
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names, vec!["greet".to_string(), "broken".to_string()]);
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Registry::new(vec![
            Arc::new(GreetTool) as Arc<dyn Tool>,
            Arc::new(GreetTool),
        ]);
        assert!(matches!(result, Err(Error::DuplicateTool(name)) if name == "greet"));
    }

    #[tokio::test]
    async fn executes_registered_tool() {
        let request = InvocationRequest::new("greet", r#"{"who":"world"}"#);
        let result = registry().execute(&request).await.unwrap();
        assert_eq!(result.data, "hello, world");
    }

    #[tokio::test]
    async fn unknown_tool_fails() {
        let request = InvocationRequest::new("nonexistent", "{}");
        let error = registry().execute(&request).await.unwrap_err();
        assert!(matches!(error, Error::UnknownTool(name) if name == "nonexistent"));
    }

    #[tokio::test]
    async fn empty_name_fails_as_unknown() {
        let request = InvocationRequest::new("", "{}");
        let error = registry().execute(&request).await.unwrap_err();
        assert!(matches!(error, Error::UnknownTool(_)));
    }

    #[tokio::test]
    async fn malformed_json_fails() {
        let request = InvocationRequest::new("greet", "not json");
        let error = registry().execute(&request).await.unwrap_err();
        assert!(matches!(error, Error::InvalidParameters(_)));
    }

    #[tokio::test]
    async fn missing_required_key_fails() {
        let request = InvocationRequest::new("greet", "{}");
        let error = registry().execute(&request).await.unwrap_err();
        assert!(matches!(error, Error::InvalidParameters(_)));
    }

    #[tokio::test]
    async fn execution_failure_propagates() {
        let request = InvocationRequest::new("broken", "{}");
        let error = registry().execute(&request).await.unwrap_err();
        assert!(matches!(error, Error::Execution(_)));
    }

    #[tokio::test]
    async fn registry_survives_failures_and_stays_idempotent() {
        let registry = registry();

        let bad = InvocationRequest::new("broken", "{}");
        assert!(registry.execute(&bad).await.is_err());

        let good = InvocationRequest::new("greet", r#"{"who":"again"}"#);
        let first = registry.execute(&good).await.unwrap();
        let second = registry.execute(&good).await.unwrap();
        assert_eq!(first.data, second.data);
    }
}
