use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive JSON Schema types accepted in tool parameter schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Object,
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Null,
}

impl DataType {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Object => value.is_object(),
            Self::String => value.is_string(),
            // An integer is a valid number; the reverse does not hold.
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Null => value.is_null(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A JSON Schema document describing a tool's accepted parameters.
///
/// Keys present in a parameter object but absent from `properties` are
/// permitted; schemas declare the keys a tool reads, not an exhaustive set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: DataType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    fn of(kind: DataType) -> Self {
        Self {
            kind,
            description: None,
            allowed: Vec::new(),
            properties: BTreeMap::new(),
            required: Vec::new(),
            items: None,
        }
    }

    #[must_use]
    pub fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        let mut schema = Self::of(DataType::Object);
        schema.properties = properties
            .into_iter()
            .map(|(name, property)| (name.to_string(), property))
            .collect();
        schema.required = required.iter().map(ToString::to_string).collect();
        schema
    }

    #[must_use]
    pub fn string() -> Self {
        Self::of(DataType::String)
    }

    #[must_use]
    pub fn number() -> Self {
        Self::of(DataType::Number)
    }

    #[must_use]
    pub fn integer() -> Self {
        Self::of(DataType::Integer)
    }

    #[must_use]
    pub fn boolean() -> Self {
        Self::of(DataType::Boolean)
    }

    #[must_use]
    pub fn array(items: Schema) -> Self {
        let mut schema = Self::of(DataType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    /// Attach a human-readable description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict a string value to a fixed set of allowed values.
    #[must_use]
    pub fn one_of(mut self, allowed: &[&str]) -> Self {
        self.allowed = allowed.iter().map(ToString::to_string).collect();
        self
    }

    /// Check a decoded parameter value against this schema.
    ///
    /// Validates the declared type, `required` keys, `enum` membership, and
    /// recurses into `properties` and array `items`.
    ///
    /// # Errors
    ///
    /// Returns a human-readable description of the first violation found.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        if !self.kind.matches(value) {
            return Err(format!(
                "expected {}, got {}",
                self.kind.name(),
                value_type(value)
            ));
        }

        if !self.allowed.is_empty() {
            if let Some(text) = value.as_str() {
                if !self.allowed.iter().any(|allowed| allowed == text) {
                    return Err(format!("value {text:?} is not an allowed value"));
                }
            }
        }

        if let Some(object) = value.as_object() {
            for key in &self.required {
                if !object.contains_key(key) {
                    return Err(format!("missing required parameter: {key}"));
                }
            }

            for (key, property) in &self.properties {
                if let Some(supplied) = object.get(key) {
                    property
                        .validate(supplied)
                        .map_err(|reason| format!("{key}: {reason}"))?;
                }
            }
        }

        if let (Some(items), Some(elements)) = (&self.items, value.as_array()) {
            for (position, element) in elements.iter().enumerate() {
                items
                    .validate(element)
                    .map_err(|reason| format!("[{position}]: {reason}"))?;
            }
        }

        Ok(())
    }
}
