// ABOUTME: JSON schema types describing tool inputs for agent tool selection
// ABOUTME: ToolSchema, JsonSchema and PropertySchema with small builder helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tool schema definition as listed to agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Description used for tool selection
    pub description: String,
    /// Argument schema
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema for an object argument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object` for tool arguments
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Properties keyed by name (sorted for stable output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    /// Required property names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl JsonSchema {
    /// Object schema from properties and required names
    #[must_use]
    pub fn object(properties: BTreeMap<String, PropertySchema>, required: &[&str]) -> Self {
        Self {
            schema_type: "object".to_owned(),
            properties: Some(properties),
            required: (!required.is_empty())
                .then(|| required.iter().map(|&name| name.to_owned()).collect()),
        }
    }

    /// Whether `name` is listed as required
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|r| r == name))
    }
}

/// Schema of a single property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type (`number`, `integer`, `string`, `array`)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Description for the agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values for string enums
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Item type for arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    /// Property of the given JSON type
    #[must_use]
    pub fn new(property_type: &str, description: &str) -> Self {
        Self {
            property_type: property_type.to_owned(),
            description: Some(description.to_owned()),
            enum_values: None,
            items: None,
        }
    }

    /// String property restricted to `values`
    #[must_use]
    pub fn string_enum<'a>(description: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            enum_values: Some(values.into_iter().map(str::to_owned).collect()),
            ..Self::new("string", description)
        }
    }

    /// Array of `item` values
    #[must_use]
    pub fn array_of(description: &str, item: Self) -> Self {
        Self {
            items: Some(Box::new(item)),
            ..Self::new("array", description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_serializes_under_enum_key() {
        let property = PropertySchema::string_enum("Gender", ["Male", "Female"]);
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["type"], "string");
        assert_eq!(json["enum"][1], "Female");
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_object_without_required() {
        let schema = JsonSchema::object(BTreeMap::new(), &[]);
        assert!(schema.required.is_none());
        assert!(!schema.is_required("anything"));
    }
}
