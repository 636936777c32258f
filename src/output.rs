//! JSON output controls for the CLI.
//!
//! CHANGELOG:
//! - 02/16/2026 - Dotted field paths for nested media fields
//! - 02/12/2026 - Initial implementation

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Output settings from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    /// Comma-separated allowlist, e.g. `id,text,media.kind`.
    pub fields: Option<String>,
}

impl OutputControls {
    /// Render data as JSON according to the controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(Value::Null);
        let value = match self.fields.as_deref() {
            Some(fields) => {
                let paths: Vec<&str> = fields
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .collect();
                filter_fields(&value, &paths)
            }
            None => value,
        };

        let rendered = if self.compact {
            serde_json::to_string(&value)
        } else {
            serde_json::to_string_pretty(&value)
        };
        rendered.unwrap_or_else(|_| "null".to_string())
    }

    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

/// Keep only the listed (possibly dotted) paths of each object.
fn filter_fields(value: &Value, paths: &[&str]) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| filter_fields(v, paths)).collect())
        }
        Value::Object(map) => {
            let mut filtered = Map::new();
            for path in paths {
                let (head, rest) = match path.split_once('.') {
                    Some((head, rest)) => (head, Some(rest)),
                    None => (*path, None),
                };
                let Some(field) = map.get(head) else {
                    continue;
                };
                let picked = match rest {
                    Some(rest) if field.is_object() => {
                        let nested = filter_fields(field, &[rest]);
                        merge(filtered.get(head), nested)
                    }
                    _ => field.clone(),
                };
                filtered.insert(head.to_string(), picked);
            }
            Value::Object(filtered)
        }
        _ => value.clone(),
    }
}

fn merge(existing: Option<&Value>, nested: Value) -> Value {
    match (existing, nested) {
        (Some(Value::Object(a)), Value::Object(b)) => {
            let mut merged = a.clone();
            merged.extend(b);
            Value::Object(merged)
        }
        (_, nested) => nested,
    }
}

/// Format an error as JSON.
pub fn format_error(error: &str) -> String {
    json!({ "error": error, "success": false }).to_string()
}
