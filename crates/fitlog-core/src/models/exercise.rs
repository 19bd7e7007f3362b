// ABOUTME: Exercise model; a single movement performed inside a workout
// ABOUTME: References the parent workout's RecordId, weight is absent for bodyweight moves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::RecordId;

/// One movement logged as part of a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Identifier of the workout this exercise belongs to
    pub workout_id: RecordId,
    /// Movement name (e.g., "Back Squat")
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in kilograms; `None` for bodyweight-only movements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl Exercise {
    /// Create a loaded exercise
    pub fn weighted(
        workout_id: RecordId,
        name: impl Into<String>,
        sets: u32,
        reps: u32,
        weight_kg: f64,
    ) -> Self {
        Self {
            workout_id,
            name: name.into(),
            sets,
            reps,
            weight_kg: Some(weight_kg),
        }
    }

    /// Create a bodyweight-only exercise
    pub fn bodyweight(workout_id: RecordId, name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            workout_id,
            name: name.into(),
            sets,
            reps,
            weight_kg: None,
        }
    }

    /// Whether the exercise carries no external load
    #[must_use]
    pub const fn is_bodyweight(&self) -> bool {
        self.weight_kg.is_none()
    }

    /// Total load moved (sets x reps x weight); zero for bodyweight movements
    #[must_use]
    pub fn volume_kg(&self) -> f64 {
        self.weight_kg
            .map_or(0.0, |weight| f64::from(self.sets * self.reps) * weight)
    }
}
