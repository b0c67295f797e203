//! Request body construction.
//!
//! Bodies are JSON objects built field by field, merged with the serialized
//! options of the operation, and cleaned of `null` values before they are
//! sent. Belvo treats an absent field and an explicit `null` differently, so
//! the cleaning step is applied to every create and update body.

use std::path::Path;

use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::Result;

/// Remove every top-level key whose value is `null`.
///
/// ```
/// use belvo_rs::api::clean;
/// use serde_json::json;
///
/// let body = json!({ "link": "L", "token": null, "save_data": true });
/// let cleaned = clean(body.as_object().unwrap().clone());
/// assert_eq!(serde_json::Value::Object(cleaned), json!({ "link": "L", "save_data": true }));
/// ```
pub fn clean(mut body: Map<String, Value>) -> Map<String, Value> {
    body.retain(|_, value| !value.is_null());
    body
}

/// Builder for a JSON request body.
#[derive(Debug, Default, Clone)]
pub(crate) struct RequestBody(Map<String, Value>);

impl RequestBody {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set a field; `None` values become `null` and are dropped on cleaning.
    pub(crate) fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Overlay the serialized options on the body; options win on conflicts.
    pub(crate) fn merge<O: Serialize>(mut self, options: &O) -> Result<Self> {
        if let Value::Object(fields) = serde_json::to_value(options)? {
            self.0.extend(fields);
        }
        Ok(self)
    }

    /// Finish the body, dropping `null` fields.
    pub(crate) fn build(self) -> Value {
        Value::Object(clean(self.0))
    }
}

/// Read a file and encode its contents as standard base64.
///
/// Returns `None` when no path is given or the file cannot be read, so the
/// field is dropped from the body instead of failing the request.
pub(crate) fn read_file_to_b64(path: Option<&Path>) -> Option<String> {
    let path = path?;
    match std::fs::read(path) {
        Ok(data) => Some(base64::engine::general_purpose::STANDARD.encode(data)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable attachment");
            None
        }
    }
}

/// Today's UTC date as `YYYY-MM-DD`.
pub(crate) fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
