use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Description of a callable tool as advertised to clients.
///
/// Immutable once registered; the registry hands out copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub schema: Schema,
}

/// A single request to execute one tool with concrete parameters.
///
/// `parameters` carries JSON text exactly as received from the transport;
/// the registry owns decoding and validating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub name: String,
    pub parameters: String,
}

impl InvocationRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into(),
        }
    }
}

/// The payload produced by a successful tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    pub data: String,
}
