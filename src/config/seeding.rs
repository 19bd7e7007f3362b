// ABOUTME: Seeding configuration loaded from environment variables
// ABOUTME: Resolves the database URL, the user owning sample data, and reset behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

/// Default SQLite database used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/fitlog.db";

/// Configuration for a sample data seeding run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Database connection URL
    pub database_url: String,
    /// User that owns the seeded workouts
    pub user_id: Uuid,
    /// Delete existing workouts and exercises before seeding
    pub reset: bool,
}

impl SeedConfig {
    /// Load seeding configuration from environment
    ///
    /// A fresh user id is generated when `SEED_USER_ID` is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `SEED_USER_ID` is not a UUID
    pub fn from_env() -> AppResult<Self> {
        let user_id = match env::var("SEED_USER_ID") {
            Ok(raw) => parse_user_id(&raw)?,
            Err(_) => Uuid::new_v4(),
        };

        Ok(Self {
            database_url: env_var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            user_id,
            reset: env_var_or("SEED_RESET", "false").parse().unwrap_or(false),
        })
    }

    /// Apply CLI overrides on top of environment values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the user id override is not a UUID
    pub fn with_overrides(
        mut self,
        database_url: Option<String>,
        user_id: Option<&str>,
        reset: bool,
    ) -> AppResult<Self> {
        if let Some(url) = database_url {
            self.database_url = url;
        }
        if let Some(raw) = user_id {
            self.user_id = parse_user_id(raw)?;
        }
        self.reset |= reset;
        Ok(self)
    }

    /// Connection string with SQLite's create-if-missing mode applied
    #[must_use]
    pub fn connection_url(&self) -> String {
        if self.database_url.starts_with("sqlite:") && !self.database_url.contains("mode=") {
            format!("{}?mode=rwc", self.database_url)
        } else {
            self.database_url.clone()
        }
    }
}

fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| AppError::config_invalid("SEED_USER_ID", e.to_string()).with_source(e))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> SeedConfig {
        SeedConfig {
            database_url: url.to_owned(),
            user_id: Uuid::nil(),
            reset: false,
        }
    }

    #[test]
    fn test_connection_url_adds_create_mode() {
        assert_eq!(
            config("sqlite:./data/fitlog.db").connection_url(),
            "sqlite:./data/fitlog.db?mode=rwc"
        );
    }

    #[test]
    fn test_connection_url_keeps_memory_and_explicit_modes() {
        assert_eq!(
            config("sqlite::memory:?mode=memory").connection_url(),
            "sqlite::memory:?mode=memory"
        );
    }

    #[test]
    fn test_overrides_replace_values() {
        let id = Uuid::new_v4();
        let updated = config("sqlite:a.db")
            .with_overrides(Some("sqlite:b.db".into()), Some(&id.to_string()), true)
            .unwrap();
        assert_eq!(updated.database_url, "sqlite:b.db");
        assert_eq!(updated.user_id, id);
        assert!(updated.reset);
    }

    #[test]
    fn test_invalid_user_id_override_is_rejected() {
        let err = config("sqlite:a.db")
            .with_overrides(None, Some("not-a-uuid"), false)
            .unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ConfigInvalid);
    }
}
