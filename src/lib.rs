// ABOUTME: Main library entry point for the Fitlog sample data seeder
// ABOUTME: Dependent batch writes of workouts and exercises against pluggable record stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog Seeder
//!
//! Populates a workout log with sample data. The interesting part is the
//! [`batch::DependentBatchWriter`]: workouts must be saved before their
//! exercises can be created, because an exercise stores the id the store
//! assigned to its workout. The writer fans those saves out concurrently,
//! keeps the parent-before-child ordering, and reports one aggregate outcome
//! exactly once.
//!
//! ## Architecture
//!
//! - **Store**: `RecordStore<R>` save capability with in-memory and SQLite adapters
//! - **Batch**: pending-operation tracker and the dependent batch writer
//! - **Dispatch**: serial callback queue on which completion callbacks run
//! - **Seeding**: the sample workout set and `populate_sample_data`
//! - **Config / Logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlog_seeder::batch::DependentBatchWriter;
//! use fitlog_seeder::dispatch::CallbackQueue;
//! use fitlog_seeder::seeding::populate_sample_data;
//! use fitlog_seeder::store::InMemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let writer = DependentBatchWriter::new(Arc::new(InMemoryStore::new()), CallbackQueue::spawn());
//!     let handle = populate_sample_data(&writer, uuid::Uuid::new_v4(), |ok| {
//!         println!("sample data seeded: {ok}");
//!     });
//!     let report = handle.wait().await?;
//!     println!("{} writes issued", report.issued);
//!     Ok(())
//! }
//! ```

/// Dependent batch writer, pending-operation tracker, and batch reports
pub mod batch;

/// Seeding configuration loaded from the environment
pub mod config;

/// Serial callback queue for completion delivery
pub mod dispatch;

/// Unified error handling re-exported from `fitlog-core`
pub mod errors;

/// Structured logging setup and per-write log events
pub mod logging;

/// Sample workout data population
pub mod seeding;

/// Record store abstraction and adapters
pub mod store;

pub use fitlog_core::constants;
pub use fitlog_core::models;
