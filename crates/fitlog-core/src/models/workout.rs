// ABOUTME: Workout session model and workout kind enumeration
// ABOUTME: Parent record of a seeding batch; exercises reference its RecordId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Broad training category of a workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Resistance training
    Strength,
    /// Steady-state endurance work
    Cardio,
    /// Mobility, stretching, yoga
    Flexibility,
    /// High-intensity interval training
    Hiit,
}

impl WorkoutKind {
    /// Stable lowercase name used for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Hiit => "hiit",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "flexibility" => Ok(Self::Flexibility),
            "hiit" => Ok(Self::Hiit),
            other => Err(AppError::invalid_input(format!(
                "unknown workout kind: {other}"
            ))),
        }
    }
}

/// A logged training session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Owner of the workout
    pub user_id: Uuid,
    /// Display name (e.g., "Leg Day")
    pub name: String,
    /// Training category
    pub kind: WorkoutKind,
    /// When the session took place (UTC)
    pub performed_at: DateTime<Utc>,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Workout {
    /// Create a workout without notes
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        kind: WorkoutKind,
        performed_at: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            kind,
            performed_at,
            duration_minutes,
            notes: None,
        }
    }

    /// Attach notes to the workout
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_kind_round_trips_through_str() {
        for kind in [
            WorkoutKind::Strength,
            WorkoutKind::Cardio,
            WorkoutKind::Flexibility,
            WorkoutKind::Hiit,
        ] {
            assert_eq!(kind.as_str().parse::<WorkoutKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_workout_kind_is_rejected() {
        assert!("zumba".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_notes_are_omitted_when_absent() {
        let workout = Workout::new(Uuid::new_v4(), "Leg Day", WorkoutKind::Strength, Utc::now(), 60);
        let json = serde_json::to_value(&workout).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["kind"], "strength");
    }
}
