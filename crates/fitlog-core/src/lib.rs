// ABOUTME: Core types and constants for the Fitlog workout seeder
// ABOUTME: Foundation crate with error handling, workout/exercise models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog Core
//!
//! Foundation crate providing shared types for the Fitlog seeder. It is kept
//! free of runtime and storage concerns so store adapters and the batch writer
//! can depend on it without pulling each other in.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Workout and exercise records plus the store-assigned `RecordId`
//! - **constants**: Unit conversion constants and the `WeightUnit` helper

/// Unified error handling system with standard error codes
pub mod errors;

/// Workout, exercise, and record identifier models
pub mod models;

/// Application constants organized by domain
pub mod constants;
