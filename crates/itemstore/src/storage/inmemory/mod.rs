//! In-memory storage backend.
//!
//! Stores items in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Used by the
//! router tests and for local runs without AWS.
//!
//! # Example
//!
//! ```rust,ignore
//! use itemstore::storage::inmemory::InMemoryItemRepository;
//!
//! let repo = InMemoryItemRepository::new();
//! ```

mod repository;

pub use repository::InMemoryItemRepository;
