//! JSON and YAML parsing, flattened to dotted property keys.

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use super::FormatError;

/// Parses a JSON object into flat properties.
///
/// Nested objects become dotted keys (`server.port`), array elements become
/// indexed keys (`hosts[0]`), and `null` becomes the empty string. Empty
/// objects and arrays produce no properties.
///
/// # Errors
///
/// Returns an error if the content is not valid JSON or its top level is not
/// an object.
///
/// # Examples
///
/// ```
/// use stencil_infrastructure::parse_json;
///
/// let props = parse_json(r#"{"server": {"port": 8080}}"#).unwrap();
/// assert_eq!(props["server.port"], "8080");
/// ```
pub fn parse_json(content: &str) -> Result<HashMap<String, String>, FormatError> {
    let JsonValue::Object(root) = serde_json::from_str::<JsonValue>(content)? else {
        return Err(FormatError::NotAMapping);
    };

    let mut properties = HashMap::new();
    for (key, value) in &root {
        flatten_json(key.clone(), value, &mut properties);
    }
    Ok(properties)
}

fn flatten_json(key: String, value: &JsonValue, out: &mut HashMap<String, String>) {
    match value {
        JsonValue::Object(map) => {
            for (child, value) in map {
                flatten_json(format!("{key}.{child}"), value, out);
            }
        }
        JsonValue::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_json(format!("{key}[{index}]"), value, out);
            }
        }
        JsonValue::Null => {
            out.insert(key, String::new());
        }
        JsonValue::String(s) => {
            out.insert(key, s.clone());
        }
        JsonValue::Bool(_) | JsonValue::Number(_) => {
            out.insert(key, value.to_string());
        }
    }
}

/// Parses a YAML mapping into flat properties.
///
/// Flattening follows [`parse_json`]. Scalar keys (numbers, booleans) are
/// rendered as text and tags are ignored. An empty document yields no
/// properties.
///
/// # Errors
///
/// Returns an error if the content is not valid YAML, its top level is not a
/// mapping, or a mapping key is not a scalar.
pub fn parse_yaml(content: &str) -> Result<HashMap<String, String>, FormatError> {
    let root: YamlValue = serde_yaml::from_str(content)?;
    let mut properties = HashMap::new();

    match root {
        YamlValue::Null => {}
        YamlValue::Mapping(map) => {
            for (key, value) in &map {
                let key = yaml_key(key, "")?;
                flatten_yaml(key, value, &mut properties)?;
            }
        }
        _ => return Err(FormatError::NotAMapping),
    }

    Ok(properties)
}

fn flatten_yaml(
    key: String,
    value: &YamlValue,
    out: &mut HashMap<String, String>,
) -> Result<(), FormatError> {
    match value {
        YamlValue::Mapping(map) => {
            for (child, value) in map {
                let child = yaml_key(child, &key)?;
                flatten_yaml(format!("{key}.{child}"), value, out)?;
            }
        }
        YamlValue::Sequence(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_yaml(format!("{key}[{index}]"), value, out)?;
            }
        }
        YamlValue::Tagged(tagged) => flatten_yaml(key, &tagged.value, out)?,
        YamlValue::Null => {
            out.insert(key, String::new());
        }
        YamlValue::String(s) => {
            out.insert(key, s.clone());
        }
        YamlValue::Bool(b) => {
            out.insert(key, b.to_string());
        }
        YamlValue::Number(n) => {
            out.insert(key, n.to_string());
        }
    }
    Ok(())
}

fn yaml_key(key: &YamlValue, parent: &str) -> Result<String, FormatError> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        _ => Err(FormatError::NonScalarKey(parent.to_string())),
    }
}
