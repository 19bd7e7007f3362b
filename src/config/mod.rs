// ABOUTME: Configuration management module for the seeder
// ABOUTME: Environment-driven settings for the database target and seeding behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Fitlog seeder
//!
//! All configuration is read from environment variables; binaries layer CLI
//! flags on top of the values loaded here.

/// Seeding run configuration (database target, owning user, reset flag)
pub mod seeding;

pub use seeding::SeedConfig;
