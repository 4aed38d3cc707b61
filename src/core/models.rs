use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute holding the generated primary key of every group.
pub const ID_FIELD: &str = "id";

/// A stored group: an open set of JSON attributes that always carries an `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(Map<String, Value>);

impl Group {
    /// Merges the caller's attributes with a generated id. The generated id
    /// replaces any `id` the caller supplied.
    #[must_use]
    pub fn new(id: impl Into<String>, attributes: Map<String, Value>) -> Self {
        let mut fields = attributes;
        fields.insert(ID_FIELD.to_string(), Value::String(id.into()));
        Self(fields)
    }

    /// Wraps attributes read back from storage as-is.
    #[must_use]
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// The key of the last record a scan evaluated, as handed out by storage.
///
/// Clients only ever echo a cursor back; they never build one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(Map<String, Value>);

impl Cursor {
    #[must_use]
    pub fn new(key: Map<String, Value>) -> Self {
        Self(key)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One page of a bounded scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Group>,
    /// `None` when storage reports that no further pages exist.
    pub last_evaluated_key: Option<Cursor>,
}
