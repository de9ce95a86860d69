//! JSON argument parsing helpers for tool handlers.
//!
//! Empty or `null` argument text is read as an empty object, since MCP
//! clients commonly omit `arguments` for parameterless tools.
//!
//! ```rust
//! use otooling::{optional_bool, parse_json_object, required_string};
//!
//! let args = parse_json_object(r#"{"order_id":"111-1","debug":true}"#).expect("object");
//! assert_eq!(required_string(&args, "order_id").expect("present"), "111-1");
//! assert_eq!(optional_bool(&args, "debug").expect("bool"), Some(true));
//! ```

use serde_json::{Map, Value};

use crate::ToolError;

pub type ToolArgs = Map<String, Value>;

pub fn parse_json_value(args_json: &str) -> Result<Value, ToolError> {
    if args_json.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(args_json)
        .map_err(|err| ToolError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

pub fn parse_json_object(args_json: &str) -> Result<ToolArgs, ToolError> {
    match parse_json_value(args_json)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(ToolError::invalid_arguments("expected JSON object arguments")),
    }
}

pub fn required_string(args: &ToolArgs, key: &str) -> Result<String, ToolError> {
    optional_string(args, key)?
        .ok_or_else(|| ToolError::invalid_arguments(format!("missing required string: '{key}'")))
}

pub fn optional_string(args: &ToolArgs, key: &str) -> Result<Option<String>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ToolError::invalid_arguments(format!(
            "'{key}' must be a string"
        ))),
    }
}

pub fn optional_bool(args: &ToolArgs, key: &str) -> Result<Option<bool>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ToolError::invalid_arguments(format!(
            "'{key}' must be a boolean"
        ))),
    }
}

pub fn optional_i32(args: &ToolArgs, key: &str) -> Result<Option<i32>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .and_then(|number| i32::try_from(number).ok())
            .map(Some)
            .ok_or_else(|| ToolError::invalid_arguments(format!("'{key}' must be an integer"))),
    }
}
