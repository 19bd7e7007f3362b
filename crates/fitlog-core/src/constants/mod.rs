// ABOUTME: Application constants organized by domain
// ABOUTME: Currently unit conversion factors and the WeightUnit helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants and helpers
pub mod units;

/// Store collection names shared by all record store adapters
pub mod collections {
    /// Workout documents / rows
    pub const WORKOUTS: &str = "workouts";
    /// Exercise documents / rows
    pub const EXERCISES: &str = "exercises";
}
