//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `itemstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use itemstore_core::item::{Item, ItemKey, UpdateExpression};
use itemstore_core::storage::{ItemRepository, RepositoryError, Result};

use super::client::create_client;
use super::conversions::{
    attributes_to_item, item_to_attributes, key_to_attributes, update_names, update_values,
};
use super::error::map_sdk_error;
use crate::config::StoreConfig;

/// DynamoDB-based repository implementation.
///
/// Holds the single SDK client shared by every request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the store configuration.
    pub async fn connect(config: &StoreConfig) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "PutItem"))?;

        Ok(())
    }

    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "GetItem"))?;

        match result.item {
            Some(item) => Ok(Some(attributes_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn scan_items(&self) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "Scan"))?;

        // Single page only, a truncated scan is returned as-is
        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = %self.table_name,
                "Scan result truncated by the store, returning first page only"
            );
        }

        // An unreadable item fails the whole listing rather than going missing
        result
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect()
    }

    async fn update_item(&self, key: &ItemKey, update: &UpdateExpression) -> Result<Item> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .update_expression(&update.expression)
            .set_expression_attribute_names(Some(update_names(update)))
            .set_expression_attribute_values(Some(update_values(update)))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "UpdateItem"))?;

        match result.attributes {
            Some(attributes) => attributes_to_item(&attributes),
            None => Err(RepositoryError::InvalidData(format!(
                "UpdateItem returned no attributes for {key}"
            ))),
        }
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "DeleteItem"))?;

        Ok(())
    }
}
