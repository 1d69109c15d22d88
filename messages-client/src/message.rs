//! Member message record as returned by the upstream API.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One upstream message entry.
///
/// The record is structurally open: only `user_name` and `message` are ever
/// read, every other field is kept untouched so the record can be rendered
/// back in full when neither of the two is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberMessage {
    fields: Map<String, Value>,
}

impl MemberMessage {
    pub const USER_NAME: &'static str = "user_name";
    pub const MESSAGE: &'static str = "message";

    /// Author of the message, if present.
    pub fn user_name(&self) -> Option<Cow<'_, str>> {
        self.field_text(Self::USER_NAME)
    }

    /// Body of the message, if present.
    pub fn message(&self) -> Option<Cow<'_, str>> {
        self.field_text(Self::MESSAGE)
    }

    /// Text of a truthy field.
    ///
    /// Falsy values (missing key, `null`, `false`, zero, empty string, empty
    /// array or object) yield `None`. Non-empty strings are borrowed; other
    /// truthy values are rendered as compact JSON.
    pub fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = self.fields.get(key)?;
        if !is_truthy(value) {
            return None;
        }
        match value {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// Raw fields of the record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Deterministic rendering of the whole record: compact JSON, keys sorted.
    ///
    /// Never empty; an empty record renders as `{}`.
    pub fn render(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}

/// JSON truthiness: everything except `null`, `false`, zero and empty
/// strings, arrays or objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

impl From<Map<String, Value>> for MemberMessage {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
