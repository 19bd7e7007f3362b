// ABOUTME: Unit conversion constants for weight measurements
// ABOUTME: Provides named constants and a WeightUnit helper to eliminate magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Kilograms per international avoirdupois pound
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Metric kilograms (storage unit)
    Kilograms,
    /// Imperial pounds
    Pounds,
}

impl WeightUnit {
    /// Convert a value in this unit to kilograms
    #[must_use]
    pub fn to_kilograms(self, value: f64) -> f64 {
        match self {
            Self::Kilograms => value,
            Self::Pounds => value * KG_PER_LB,
        }
    }

    /// Convert a value in kilograms to this unit
    #[must_use]
    pub fn from_kilograms(self, kilograms: f64) -> f64 {
        match self {
            Self::Kilograms => kilograms,
            Self::Pounds => kilograms / KG_PER_LB,
        }
    }
}
