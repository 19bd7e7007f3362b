// ABOUTME: Core data models for the Fitlog seeder
// ABOUTME: Re-exports Workout, Exercise, WorkoutKind and the store-assigned RecordId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Workout`: a logged training session, the parent record of a seeding batch
//! - `Exercise`: one movement inside a workout; needs the workout's identifier
//! - `RecordId`: identifier assigned by a store when a record is saved

mod exercise;
mod record_id;
mod workout;

pub use exercise::Exercise;
pub use record_id::RecordId;
pub use workout::{Workout, WorkoutKind};
