//! Update-expression building.
//!
//! Turns an attribute bag into a `set` expression plus the placeholder maps
//! that go with it. Placeholders are numbered, never derived from the field
//! name, so reserved words and arbitrary characters in field names are safe.

use std::collections::BTreeMap;

use super::error::ItemError;
use super::types::{AttrValue, Attributes, ID_ATTRIBUTE, NAME_ATTRIBUTE};

const NAME_PLACEHOLDER_PREFIX: &str = "#f";
const VALUE_PLACEHOLDER_PREFIX: &str = ":f";

/// A partial update ready to hand to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    /// `set #f1 = :f1, #f2 = :f2, ...`
    pub expression: String,
    /// Name placeholder to field name.
    pub names: BTreeMap<String, String>,
    /// Value placeholder to value.
    pub values: BTreeMap<String, AttrValue>,
}

impl UpdateExpression {
    /// Builds the expression for setting every attribute in `attributes`.
    ///
    /// Fields are numbered in map order starting at 1. An empty map and any
    /// key attribute are rejected.
    pub fn build(attributes: &Attributes) -> Result<Self, ItemError> {
        if attributes.is_empty() {
            return Err(ItemError::EmptyUpdate);
        }
        if let Some(key) = attributes
            .keys()
            .find(|k| k.as_str() == ID_ATTRIBUTE || k.as_str() == NAME_ATTRIBUTE)
        {
            return Err(ItemError::KeyAttributeUpdate(key.clone()));
        }

        let mut assignments = Vec::with_capacity(attributes.len());
        let mut names = BTreeMap::new();
        let mut values = BTreeMap::new();

        for (i, (field, value)) in attributes.iter().enumerate() {
            let name_token = format!("{NAME_PLACEHOLDER_PREFIX}{}", i + 1);
            let value_token = format!("{VALUE_PLACEHOLDER_PREFIX}{}", i + 1);

            assignments.push(format!("{name_token} = {value_token}"));
            names.insert(name_token, field.clone());
            values.insert(value_token, value.clone());
        }

        Ok(Self {
            expression: format!("set {}", assignments.join(", ")),
            names,
            values,
        })
    }

    /// Resolves the placeholders back into `(field, value)` pairs.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &AttrValue)> + '_ {
        self.names.iter().filter_map(|(name_token, field)| {
            let index = name_token.strip_prefix(NAME_PLACEHOLDER_PREFIX)?;
            let value = self
                .values
                .get(&format!("{VALUE_PLACEHOLDER_PREFIX}{index}"))?;
            Some((field.as_str(), value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(pairs: &[(&str, AttrValue)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_single_field() {
        let update = UpdateExpression::build(&attributes(&[("y", AttrValue::from(5))])).unwrap();

        assert_eq!(update.expression, "set #f1 = :f1");
        assert_eq!(update.names.get("#f1").map(String::as_str), Some("y"));
        assert_eq!(update.values.get(":f1"), Some(&AttrValue::from(5)));
    }

    #[test]
    fn test_multiple_fields_in_key_order() {
        let update = UpdateExpression::build(&attributes(&[
            ("color", "red".into()),
            ("age", AttrValue::from(3)),
            ("active", true.into()),
        ]))
        .unwrap();

        assert_eq!(update.expression, "set #f1 = :f1, #f2 = :f2, #f3 = :f3");
        assert_eq!(update.names["#f1"], "active");
        assert_eq!(update.names["#f2"], "age");
        assert_eq!(update.names["#f3"], "color");
        assert_eq!(update.values[":f1"], AttrValue::Bool(true));
        assert_eq!(update.values[":f3"], AttrValue::from("red"));
    }

    #[test]
    fn test_awkward_field_names_only_appear_in_names_map() {
        let update = UpdateExpression::build(&attributes(&[
            ("status", "open".into()),
            ("first-name", "Ada".into()),
            ("a b", AttrValue::Null),
        ]))
        .unwrap();

        assert!(!update.expression.contains("status"));
        assert!(!update.expression.contains("first-name"));
        let fields: Vec<&str> = update.names.values().map(String::as_str).collect();
        assert_eq!(fields, vec!["a b", "first-name", "status"]);
    }

    #[test]
    fn test_empty_update_is_rejected() {
        assert_eq!(
            UpdateExpression::build(&Attributes::new()),
            Err(ItemError::EmptyUpdate)
        );
    }

    #[test]
    fn test_key_attributes_are_rejected() {
        assert_eq!(
            UpdateExpression::build(&attributes(&[("name", "b".into()), ("x", 1.into())])),
            Err(ItemError::KeyAttributeUpdate("name".to_string()))
        );
        assert_eq!(
            UpdateExpression::build(&attributes(&[("id", 2.into())])),
            Err(ItemError::KeyAttributeUpdate("id".to_string()))
        );
    }

    #[test]
    fn test_assignments_resolve_placeholders() {
        let update = UpdateExpression::build(&attributes(&[
            ("x", AttrValue::from(1)),
            ("y", AttrValue::from(2)),
        ]))
        .unwrap();

        let pairs: Vec<(&str, &AttrValue)> = update.assignments().collect();

        assert_eq!(
            pairs,
            vec![("x", &AttrValue::from(1)), ("y", &AttrValue::from(2))]
        );
    }

    #[test]
    fn test_assignments_with_ten_or_more_fields() {
        let attrs: Attributes = (0..12)
            .map(|i| (format!("field{i:02}"), AttrValue::from(i)))
            .collect();

        let update = UpdateExpression::build(&attrs).unwrap();

        assert_eq!(update.assignments().count(), 12);
        for (field, value) in update.assignments() {
            assert_eq!(attrs.get(field), Some(value));
        }
    }
}
