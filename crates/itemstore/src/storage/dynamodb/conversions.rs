//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use itemstore_core::item::{
    AttrValue, Item, ItemKey, UpdateExpression, ID_ATTRIBUTE, NAME_ATTRIBUTE,
};
use itemstore_core::storage::RepositoryError;

// ============================================================================
// Keys
// ============================================================================

/// Convert an ItemKey to the DynamoDB key map.
pub fn key_to_attributes(key: &ItemKey) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::with_capacity(2);
    attributes.insert(ID_ATTRIBUTE.to_string(), AttributeValue::N(key.id.to_string()));
    attributes.insert(NAME_ATTRIBUTE.to_string(), AttributeValue::S(key.name.clone()));
    attributes
}

// ============================================================================
// Items
// ============================================================================

/// Convert an Item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = key_to_attributes(&item.key);
    for (name, value) in &item.attributes {
        attributes.insert(name.clone(), to_attribute_value(value));
    }
    attributes
}

/// Convert a DynamoDB item to Item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    let key = ItemKey {
        id: get_id(attributes)?,
        name: get_name(attributes)?,
    };

    let mut rest = BTreeMap::new();
    for (name, value) in attributes {
        if name == ID_ATTRIBUTE || name == NAME_ATTRIBUTE {
            continue;
        }
        rest.insert(name.clone(), from_attribute_value(value)?);
    }

    Ok(Item {
        key,
        attributes: rest,
    })
}

// ============================================================================
// Update expressions
// ============================================================================

/// Convert the value placeholders of an update to DynamoDB values.
pub fn update_values(update: &UpdateExpression) -> HashMap<String, AttributeValue> {
    update
        .values
        .iter()
        .map(|(token, value)| (token.clone(), to_attribute_value(value)))
        .collect()
}

/// Convert the name placeholders of an update to the SDK's map type.
pub fn update_names(update: &UpdateExpression) -> HashMap<String, String> {
    update
        .names
        .iter()
        .map(|(token, name)| (token.clone(), name.clone()))
        .collect()
}

// ============================================================================
// Values
// ============================================================================

/// Convert an AttrValue to a DynamoDB AttributeValue.
pub fn to_attribute_value(value: &AttrValue) -> AttributeValue {
    match value {
        AttrValue::Null => AttributeValue::Null(true),
        AttrValue::Bool(b) => AttributeValue::Bool(*b),
        AttrValue::Number(n) => AttributeValue::N(n.to_string()),
        AttrValue::String(s) => AttributeValue::S(s.clone()),
        AttrValue::List(values) => {
            AttributeValue::L(values.iter().map(to_attribute_value).collect())
        }
        AttrValue::Map(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), to_attribute_value(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB AttributeValue to an AttrValue.
///
/// String and number sets come back as lists. Binary values come back as
/// standard base64 strings, binary sets as lists of them.
pub fn from_attribute_value(value: &AttributeValue) -> Result<AttrValue, RepositoryError> {
    match value {
        AttributeValue::Null(_) => Ok(AttrValue::Null),
        AttributeValue::Bool(b) => Ok(AttrValue::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(AttrValue::Number),
        AttributeValue::S(s) => Ok(AttrValue::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(from_attribute_value)
            .collect::<Result<Vec<_>, _>>()
            .map(AttrValue::List),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| from_attribute_value(v).map(|v| (k.clone(), v)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(AttrValue::Map),
        AttributeValue::Ss(values) => Ok(AttrValue::List(
            values.iter().cloned().map(AttrValue::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(AttrValue::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(AttrValue::List),
        AttributeValue::B(blob) => Ok(AttrValue::String(encode_blob(blob))),
        AttributeValue::Bs(blobs) => Ok(AttrValue::List(
            blobs
                .iter()
                .map(|blob| AttrValue::String(encode_blob(blob)))
                .collect(),
        )),
        _ => Err(RepositoryError::Serialization(
            "unknown attribute type".to_string(),
        )),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn parse_number(raw: &str) -> Result<serde_json::Number, RepositoryError> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(i.into());
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Ok(u.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| RepositoryError::Serialization(format!("invalid number: {raw}")))
}

fn encode_blob(blob: &Blob) -> String {
    base64::engine::general_purpose::STANDARD.encode(blob.as_ref())
}

/// Reads the item id. Older writers stored it as a string, so a string
/// holding an integer is accepted the same way a create body's id is.
fn get_id(attributes: &HashMap<String, AttributeValue>) -> Result<i64, RepositoryError> {
    match attributes.get(ID_ATTRIBUTE) {
        Some(AttributeValue::N(raw)) | Some(AttributeValue::S(raw)) => raw
            .trim()
            .parse()
            .map_err(|_| RepositoryError::InvalidData(format!("item id is not an integer: {raw}"))),
        Some(_) => Err(RepositoryError::InvalidData(
            "item id is not a number".to_string(),
        )),
        None => Err(RepositoryError::InvalidData(format!(
            "missing attribute: {ID_ATTRIBUTE}"
        ))),
    }
}

fn get_name(attributes: &HashMap<String, AttributeValue>) -> Result<String, RepositoryError> {
    match attributes.get(NAME_ATTRIBUTE) {
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(_) => Err(RepositoryError::InvalidData(
            "item name is not a string".to_string(),
        )),
        None => Err(RepositoryError::InvalidData(format!(
            "missing attribute: {NAME_ATTRIBUTE}"
        ))),
    }
}
