// ABOUTME: Fixed sample workouts and exercises used to populate demo accounts
// ABOUTME: Weights are authored in pounds and converted to kilograms when materialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::batch::DependentGroup;
use chrono::{DateTime, Duration, Utc};
use fitlog_core::constants::units::WeightUnit;
use fitlog_core::models::{Exercise, RecordId, Workout, WorkoutKind};
use uuid::Uuid;

/// Sample exercise definition
#[derive(Debug, Clone, Copy)]
pub struct SampleExercise {
    /// Movement name
    pub name: &'static str,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in pounds; `None` for bodyweight movements
    pub weight_lb: Option<f64>,
}

/// Sample workout definition
#[derive(Debug, Clone, Copy)]
pub struct SampleWorkout {
    /// Workout name
    pub name: &'static str,
    /// Training category
    pub kind: WorkoutKind,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Session notes
    pub notes: &'static str,
    /// Exercises performed, in order
    pub exercises: &'static [SampleExercise],
}

const fn loaded(name: &'static str, sets: u32, reps: u32, weight_lb: f64) -> SampleExercise {
    SampleExercise {
        name,
        sets,
        reps,
        weight_lb: Some(weight_lb),
    }
}

const fn bodyweight(name: &'static str, sets: u32, reps: u32) -> SampleExercise {
    SampleExercise {
        name,
        sets,
        reps,
        weight_lb: None,
    }
}

/// The demo workout history
pub const SAMPLE_WORKOUTS: &[SampleWorkout] = &[
    SampleWorkout {
        name: "Upper Body Power",
        kind: WorkoutKind::Strength,
        duration_minutes: 50,
        notes: "Pressing felt strong, add 5 lb to bench next week",
        exercises: &[
            loaded("Bench Press", 4, 8, 135.0),
            bodyweight("Pull-Ups", 3, 10),
            loaded("Overhead Press", 3, 10, 85.0),
        ],
    },
    SampleWorkout {
        name: "Leg Day",
        kind: WorkoutKind::Strength,
        duration_minutes: 60,
        notes: "Depth on squats improving",
        exercises: &[
            loaded("Back Squat", 5, 5, 185.0),
            loaded("Romanian Deadlift", 3, 10, 135.0),
            loaded("Walking Lunges", 3, 12, 40.0),
        ],
    },
    SampleWorkout {
        name: "Full Body Circuit",
        kind: WorkoutKind::Hiit,
        duration_minutes: 35,
        notes: "Three rounds, 60 seconds rest between rounds",
        exercises: &[
            loaded("Kettlebell Swings", 4, 15, 35.0),
            loaded("Dumbbell Thrusters", 3, 12, 30.0),
            loaded("Renegade Rows", 3, 10, 25.0),
        ],
    },
    SampleWorkout {
        name: "Core & Conditioning",
        kind: WorkoutKind::Strength,
        duration_minutes: 30,
        notes: "Keep rest under 45 seconds",
        exercises: &[
            loaded("Cable Crunch", 3, 15, 50.0),
            loaded("Weighted Plank Drag", 3, 12, 20.0),
            loaded("Farmer Carry", 3, 1, 70.0),
        ],
    },
];

impl SampleExercise {
    /// Build the exercise record for a saved workout
    #[must_use]
    pub fn materialize(&self, workout_id: &RecordId) -> Exercise {
        match self.weight_lb {
            Some(lb) => Exercise::weighted(
                workout_id.clone(),
                self.name,
                self.sets,
                self.reps,
                WeightUnit::Pounds.to_kilograms(lb),
            ),
            None => Exercise::bodyweight(workout_id.clone(), self.name, self.sets, self.reps),
        }
    }
}

impl SampleWorkout {
    /// Build the workout record for `user_id`
    #[must_use]
    pub fn materialize(&self, user_id: Uuid, performed_at: DateTime<Utc>) -> Workout {
        Workout::new(user_id, self.name, self.kind, performed_at, self.duration_minutes)
            .with_notes(self.notes)
    }
}

/// Sample workouts as dependent groups, dated on the days before `now`
#[must_use]
pub fn sample_workouts(user_id: Uuid, now: DateTime<Utc>) -> Vec<DependentGroup<Workout, Exercise>> {
    SAMPLE_WORKOUTS
        .iter()
        .zip(1_i64..)
        .map(|(sample, days_ago)| {
            let exercises = sample.exercises;
            DependentGroup::new(
                sample.materialize(user_id, now - Duration::days(days_ago)),
                move |workout_id: &RecordId| {
                    exercises
                        .iter()
                        .map(|exercise| exercise.materialize(workout_id))
                        .collect()
                },
            )
        })
        .collect()
}
