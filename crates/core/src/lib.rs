//! Core types for the itemstore service.
//!
//! Everything in this crate is pure: the item model, the update-expression
//! builder and the storage contract. Backends and the HTTP layer live in the
//! `itemstore` binary crate.

pub mod item;
pub mod storage;
