// ABOUTME: Sample workout data population built on the dependent batch writer
// ABOUTME: Seeds four workouts, each followed by its three exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sample Data Seeding
//!
//! Demo accounts need a populated workout history. [`populate_sample_data`]
//! writes the fixed set from [`sample_data`] through a
//! [`DependentBatchWriter`]: each workout is saved first and its exercises are
//! created against the id the store assigned to it.

/// Sample workout and exercise definitions
pub mod sample_data;

pub use sample_data::{sample_workouts, SampleExercise, SampleWorkout, SAMPLE_WORKOUTS};

use crate::batch::{BatchHandle, DependentBatchWriter};
use crate::store::RecordStore;
use chrono::Utc;
use fitlog_core::models::{Exercise, Workout};
use tracing::info;
use uuid::Uuid;

/// Seed the sample workouts for `user_id`
///
/// Returns immediately; `on_complete` receives `true` once every workout and
/// exercise has been saved, `false` if any save failed. Running it twice
/// writes the data twice.
#[must_use = "dropping the handle discards the report; seeding still runs"]
pub fn populate_sample_data<S, F>(
    writer: &DependentBatchWriter<S>,
    user_id: Uuid,
    on_complete: F,
) -> BatchHandle
where
    S: RecordStore<Workout> + RecordStore<Exercise> + 'static,
    F: FnOnce(bool) + Send + 'static,
{
    let groups = sample_workouts(user_id, Utc::now());
    let exercises: usize = SAMPLE_WORKOUTS.iter().map(|w| w.exercises.len()).sum();
    info!(
        user.id = %user_id,
        workouts = groups.len(),
        exercises,
        "Seeding sample workouts"
    );
    writer.populate(groups, on_complete)
}
