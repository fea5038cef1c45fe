//! Pure parsing of request input into items, keys and attribute bags.

use serde_json::Value;

use super::error::ItemError;
use super::types::{AttrValue, Attributes, Item, ItemKey, ID_ATTRIBUTE, NAME_ATTRIBUTE};

/// Parses an item id taken from a URL path segment.
pub fn parse_item_id(raw: &str) -> Result<i64, ItemError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ItemError::InvalidId(raw.to_string()))
}

/// Builds an item from a create request body.
///
/// `id` may be a JSON integer or a string holding one, so it is coerced the
/// same way as the path segment on the read routes. Every other field is
/// kept as-is.
pub fn item_from_body(body: Value) -> Result<Item, ItemError> {
    let Value::Object(mut fields) = body else {
        return Err(ItemError::NotAnObject);
    };

    let id = match fields.remove(ID_ATTRIBUTE) {
        Some(value) => id_from_value(&value)?,
        None => return Err(ItemError::MissingKeyAttribute(ID_ATTRIBUTE)),
    };
    let name = match fields.remove(NAME_ATTRIBUTE) {
        Some(Value::String(name)) => name,
        Some(_) => return Err(ItemError::InvalidName),
        None => return Err(ItemError::MissingKeyAttribute(NAME_ATTRIBUTE)),
    };

    Ok(Item {
        key: ItemKey { id, name },
        attributes: fields
            .into_iter()
            .map(|(k, v)| (k, AttrValue::from(v)))
            .collect(),
    })
}

/// Builds the attribute bag of an update request body.
///
/// Key attributes are left in place; the update-expression builder rejects
/// them.
pub fn attributes_from_body(body: Value) -> Result<Attributes, ItemError> {
    let Value::Object(fields) = body else {
        return Err(ItemError::NotAnObject);
    };

    Ok(fields
        .into_iter()
        .map(|(k, v)| (k, AttrValue::from(v)))
        .collect())
}

fn id_from_value(value: &Value) -> Result<i64, ItemError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .ok_or_else(|| ItemError::InvalidId(n.to_string())),
        Value::String(s) => parse_item_id(s),
        other => Err(ItemError::InvalidId(other.to_string())),
    }
}
