use serde::{Deserialize, Serialize};

use toolshed_core::{Error, InvocationRequest, ToolDefinition};

use crate::jsonrpc::{JsonRpcError, INTERNAL_ERROR, INVALID_PARAMS};

/// Methods of the tool service.
pub const METHOD_INITIALIZE: &str = "initialize";
pub const METHOD_TOOLS_LIST: &str = "tools/list";
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// Version string reported by `initialize`.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Server-defined error codes for the invocation failure taxonomy.
/// Parameter problems map onto the standard `INVALID_PARAMS`.
pub const UNKNOWN_TOOL: i32 = -32001;
pub const EXECUTION_FAILED: i32 = -32002;

/// Wire form of a tool definition: the schema travels as JSON text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub schema: String,
}

impl ToolDescriptor {
    /// Serialize a core definition for `tools/list`.
    ///
    /// # Errors
    ///
    /// Fails only if the schema cannot be rendered as JSON text.
    pub fn from_definition(definition: &ToolDefinition) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: definition.name.clone(),
            description: definition.description.clone(),
            schema: serde_json::to_string(&definition.schema)?,
        })
    }
}

/// Result payload of `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult {
    pub tools: Vec<ToolDescriptor>,
}

fn empty_object() -> String {
    "{}".to_string()
}

/// Parameters of a `tools/call` request. An absent `parameters` field means
/// an empty parameter object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallParams {
    pub name: String,
    #[serde(default = "empty_object")]
    pub parameters: String,
}

impl From<CallParams> for InvocationRequest {
    fn from(params: CallParams) -> Self {
        Self::new(params.name, params.parameters)
    }
}

/// Result payload of a successful `tools/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResult {
    pub data: String,
}

/// Map a core failure onto its JSON-RPC error object.
#[must_use]
pub fn error_object(error: &Error) -> JsonRpcError {
    let code = match error {
        Error::UnknownTool(_) => UNKNOWN_TOOL,
        Error::InvalidParameters(_) => INVALID_PARAMS,
        Error::Execution(_) => EXECUTION_FAILED,
        // Construction-time only; never expected on the wire.
        Error::DuplicateTool(_) => INTERNAL_ERROR,
    };

    JsonRpcError::new(code, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshed_core::Schema;

    #[test]
    fn descriptor_carries_schema_as_text() {
        let definition = ToolDefinition {
            name: "get_weather".to_string(),
            description: "get the weather for a given location.".to_string(),
            schema: Schema::object(
                vec![("location", Schema::array(Schema::string()))],
                &["location"],
            ),
        };

        let descriptor = ToolDescriptor::from_definition(&definition).unwrap();
        assert_eq!(descriptor.name, "get_weather");

        // The schema string must itself parse back as a schema document.
        let parsed: Schema = serde_json::from_str(&descriptor.schema).unwrap();
        assert!(parsed.required.contains(&"location".to_string()));
    }

    #[test]
    fn call_params_default_to_empty_object() {
        let params: CallParams = serde_json::from_str(r#"{"name":"get_weather"}"#).unwrap();
        assert_eq!(params.parameters, "{}");

        let request = InvocationRequest::from(params);
        assert_eq!(request.name, "get_weather");
    }

    #[test]
    fn error_codes_match_taxonomy() {
        let unknown = error_object(&Error::UnknownTool("bogus".to_string()));
        assert_eq!(unknown.code, UNKNOWN_TOOL);

        let invalid = error_object(&Error::InvalidParameters("bad".to_string()));
        assert_eq!(invalid.code, INVALID_PARAMS);

        let failed = error_object(&Error::Execution("upstream".to_string()));
        assert_eq!(failed.code, EXECUTION_FAILED);
    }
}
