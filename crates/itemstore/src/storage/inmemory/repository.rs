//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemstore_core::item::{Item, ItemKey, UpdateExpression};
use itemstore_core::storage::{ItemRepository, Result};

/// In-memory storage backend.
///
/// Follows the table's semantics: puts replace, updates upsert, deletes
/// of missing keys succeed. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<ItemKey, Item>>>,
}

impl InMemoryItemRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn put_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(item.key.clone(), item.clone());
        Ok(())
    }

    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn scan_items(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn update_item(&self, key: &ItemKey, update: &UpdateExpression) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = items
            .entry(key.clone())
            .or_insert_with(|| Item::new(key.clone()));
        item.apply(update.assignments());
        Ok(item.clone())
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}
