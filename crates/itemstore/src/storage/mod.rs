//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ItemRepository`
//! trait defined in `itemstore_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: process-local map, for running without AWS
//!
//! These features are mutually exclusive. The in-memory backend is always
//! compiled for tests.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p itemstore
//! ```
//!
//! Build with the in-memory store:
//! ```bash
//! cargo build -p itemstore --no-default-features --features inmemory
//! ```

use std::sync::Arc;

use itemstore_core::storage::ItemRepository;

use crate::config::StoreConfig;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p itemstore --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

/// Builds the repository for the enabled backend.
#[cfg(feature = "dynamodb")]
pub async fn connect(config: &StoreConfig) -> anyhow::Result<Arc<dyn ItemRepository>> {
    tracing::info!(target_env = %config.target_display(), "Connecting to item store");

    let repository = dynamodb::DynamoDbRepository::connect(config).await;
    Ok(Arc::new(repository))
}

/// Builds the repository for the enabled backend.
#[cfg(all(feature = "inmemory", not(feature = "dynamodb")))]
pub async fn connect(config: &StoreConfig) -> anyhow::Result<Arc<dyn ItemRepository>> {
    tracing::warn!(
        table = %config.table_name,
        "Using in-memory item store, data is lost on shutdown"
    );

    Ok(Arc::new(inmemory::InMemoryItemRepository::new()))
}
