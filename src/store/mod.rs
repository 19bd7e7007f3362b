// ABOUTME: Record store abstraction consumed by the batch writer
// ABOUTME: Defines the async save capability and exposes in-memory and SQLite adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Stores
//!
//! The batch writer only needs one capability from persistence: save a record
//! and get back the identifier the store assigned to it. [`RecordStore`] is
//! implemented once per record type, so a single store value can accept both
//! workouts and the exercises that reference them.

/// In-memory document store
pub mod memory;
/// SQLite-backed store using sqlx
pub mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use async_trait::async_trait;
use fitlog_core::models::RecordId;

/// Asynchronous save capability for one record type
///
/// Implementations own identifier assignment and any retry policy. A failed
/// save must not leave a partially written record behind.
#[async_trait]
pub trait RecordStore<R>: Send + Sync
where
    R: Send + 'static,
{
    /// Persist `record` and return the identifier assigned to it
    async fn save(&self, record: R) -> AppResult<RecordId>;
}

