use thiserror::Error;

/// Errors raised while turning caller input into items or updates.
///
/// These are all detected before the store is contacted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required key attribute: {0}")]
    MissingKeyAttribute(&'static str),
    #[error("Invalid item id: {0}")]
    InvalidId(String),
    #[error("Key attribute 'name' must be a string")]
    InvalidName,
    #[error("Update body must set at least one attribute")]
    EmptyUpdate,
    #[error("Key attribute cannot be updated: {0}")]
    KeyAttributeUpdate(String),
}
