use async_trait::async_trait;

use crate::item::{Item, ItemKey, UpdateExpression};

use super::Result;

/// Repository for items in the single item table.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Writes an item, fully replacing any item with the same key.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Gets an item by its key.
    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>>;

    /// Returns every item a single scan yields.
    async fn scan_items(&self) -> Result<Vec<Item>>;

    /// Applies a partial update and returns the item as it is afterwards.
    ///
    /// Updating a key that does not exist creates the item.
    async fn update_item(&self, key: &ItemKey, update: &UpdateExpression) -> Result<Item>;

    /// Deletes an item by its key. Deleting a missing key succeeds.
    async fn delete_item(&self, key: &ItemKey) -> Result<()>;
}
