//! Flattens nested records into `(path, value)` leaves.
//!
//! Any `Serialize` type goes through `serde_json::Value` first, so the
//! flattener knows nothing about movie fields:
//!
//! ```text
//! {"Director": ["Frank Miller"], "Ratings": [{"Source": "Joyn", "Value": "3.0/5.0"}]}
//!   -> Director.0          = "Frank Miller"
//!      Ratings.0.Source    = "Joyn"
//!      Ratings.0.Value     = "3.0/5.0"
//! ```
//!
//! Leaves are strings, numbers and booleans, all stored as text. `null`
//! values and empty arrays/objects produce no leaf.

use serde::Serialize;
use serde_json::Value;

/// Flattened leaves in serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    fields: Vec<(String, String)>,
}

impl FlatRecord {
    /// Iterate `(path, value)` pairs in flattening order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(path, value)| (path.as_str(), value.as_str()))
    }

    /// Value at an exact path
    pub fn get(&self, path: &str) -> Option<&str> {
        self.iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Flatten any serializable record
pub fn flatten<T: Serialize + ?Sized>(record: &T) -> serde_json::Result<FlatRecord> {
    let value = serde_json::to_value(record)?;
    Ok(flatten_value(&value))
}

/// Flatten an already-built JSON value
pub fn flatten_value(value: &Value) -> FlatRecord {
    let mut fields = Vec::new();
    let mut path = String::new();
    collect_leaves(value, &mut path, &mut fields);
    FlatRecord { fields }
}

fn collect_leaves(value: &Value, path: &mut String, fields: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => fields.push((path.clone(), flag.to_string())),
        Value::Number(number) => fields.push((path.clone(), number.to_string())),
        Value::String(text) => fields.push((path.clone(), text.clone())),
        Value::Array(items) => {
            for (position, item) in items.iter().enumerate() {
                descend(path, &position.to_string(), |path| {
                    collect_leaves(item, path, fields)
                });
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                descend(path, key, |path| collect_leaves(item, path, fields));
            }
        }
    }
}

/// Push `segment` onto the path for the duration of `visit`
fn descend(path: &mut String, segment: &str, visit: impl FnOnce(&mut String)) {
    let parent_len = path.len();
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(segment);
    visit(path);
    path.truncate(parent_len);
}
