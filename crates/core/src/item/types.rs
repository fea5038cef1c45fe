use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Name of the numeric half of the composite key.
pub const ID_ATTRIBUTE: &str = "id";
/// Name of the string half of the composite key.
pub const NAME_ATTRIBUTE: &str = "name";

/// Open attribute bag carried by every item besides its key.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Composite primary key of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey {
    pub id: i64,
    pub name: String,
}

impl ItemKey {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.id, self.name)
    }
}

/// A single attribute value.
///
/// Mirrors the JSON data model. Numbers keep their JSON representation so
/// integers and floats survive a round trip through the store unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<AttrValue>),
    Map(BTreeMap<String, AttrValue>),
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttrValue::Null,
            serde_json::Value::Bool(b) => AttrValue::Bool(b),
            serde_json::Value::Number(n) => AttrValue::Number(n),
            serde_json::Value::String(s) => AttrValue::String(s),
            serde_json::Value::Array(values) => {
                AttrValue::List(values.into_iter().map(AttrValue::from).collect())
            }
            serde_json::Value::Object(map) => AttrValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, AttrValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<AttrValue> for serde_json::Value {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Null => serde_json::Value::Null,
            AttrValue::Bool(b) => serde_json::Value::Bool(b),
            AttrValue::Number(n) => serde_json::Value::Number(n),
            AttrValue::String(s) => serde_json::Value::String(s),
            AttrValue::List(values) => {
                serde_json::Value::Array(values.into_iter().map(Into::into).collect())
            }
            AttrValue::Map(map) => {
                serde_json::Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// A stored record: the composite key plus an open attribute bag.
///
/// Serializes as one flat JSON object, `{"id": .., "name": .., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    #[serde(flatten)]
    pub key: ItemKey,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Item {
    /// Creates an item with no attributes besides its key.
    pub fn new(key: ItemKey) -> Self {
        Self {
            key,
            attributes: Attributes::new(),
        }
    }

    /// Adds an attribute. Key attribute names are ignored.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let name = name.into();
        if name != ID_ATTRIBUTE && name != NAME_ATTRIBUTE {
            self.attributes.insert(name, value.into());
        }
        self
    }

    /// Sets each attribute, overwriting existing values.
    pub fn apply<'a>(&mut self, assignments: impl IntoIterator<Item = (&'a str, &'a AttrValue)>) {
        for (field, value) in assignments {
            self.attributes.insert(field.to_string(), value.clone());
        }
    }
}
