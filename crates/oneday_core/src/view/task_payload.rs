//! Tolerant parsing of the persisted `tasks_json` payload.
//!
//! # Responsibility
//! - Turn the untyped payload into `ParsedTaskList`.
//! - Extract record fields through one typed accessor with defaults.
//!
//! # Invariants
//! - A payload that is not a JSON array of objects is `Malformed` as a whole;
//!   no records are returned from it.
//! - A missing, `null` or wrong-typed field falls back to its default and
//!   never rejects the record.
//! - Record order equals array order.

use crate::model::task::{TaskRecord, DEFAULT_TASK_TITLE};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIELD_TITLE: &str = "title";
const FIELD_DESCRIPTION: &str = "description";
const FIELD_STATUS: &str = "status";

/// Task payload could not be read as a list of records.
///
/// The reason carries structural metadata only, never payload text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTaskData {
    reason: String,
}

impl MalformedTaskData {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for MalformedTaskData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed task data: {}", self.reason)
    }
}

impl Error for MalformedTaskData {}

/// Outcome of parsing one task payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedTaskList {
    /// Records in payload order; may be empty.
    Valid(Vec<TaskRecord>),
    Malformed(MalformedTaskData),
}

/// Field types that can be read from a record with a fallback.
trait FieldValue: Sized {
    fn from_json(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for bool {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

// Values are taken only at their exact JSON type: `"true"` is not a bool and
// `42` is not a string. No string coercion is done.
fn field_or<T: FieldValue>(object: &Map<String, Value>, key: &str, default: T) -> T {
    object.get(key).and_then(T::from_json).unwrap_or(default)
}

/// Parses a serialized task list.
pub fn parse_task_list(raw: &str) -> ParsedTaskList {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            return ParsedTaskList::Malformed(MalformedTaskData::new(format!(
                "{:?} error at line {} column {}",
                err.classify(),
                err.line(),
                err.column()
            )));
        }
    };

    let Value::Array(items) = value else {
        return ParsedTaskList::Malformed(MalformedTaskData::new(format!(
            "expected array, found {}",
            json_type_name(&value)
        )));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            return ParsedTaskList::Malformed(MalformedTaskData::new(format!(
                "element {index} is {}, expected object",
                json_type_name(item)
            )));
        };
        records.push(record_from_object(object));
    }

    ParsedTaskList::Valid(records)
}

fn record_from_object(object: &Map<String, Value>) -> TaskRecord {
    TaskRecord {
        title: field_or(object, FIELD_TITLE, DEFAULT_TASK_TITLE.to_string()),
        description: field_or(object, FIELD_DESCRIPTION, String::new()),
        status: field_or(object, FIELD_STATUS, false),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
