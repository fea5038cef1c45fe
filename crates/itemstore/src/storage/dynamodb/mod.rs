//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ItemRepository`
//! using `aws-sdk-dynamodb`. The table has a numeric partition key `id` and a
//! string sort key `name`.

mod client;
mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
