// ABOUTME: SQLite-backed record store for workouts and exercises using sqlx
// ABOUTME: Creates the schema on connect and enforces exercise -> workout foreign keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use fitlog_core::constants::collections;
use fitlog_core::models::{Exercise, RecordId, Workout};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Pool size for file-backed databases
const MAX_FILE_CONNECTIONS: u32 = 5;

/// Record store persisting to SQLite
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` and run migrations
    ///
    /// In-memory databases are limited to a single connection because every
    /// SQLite connection to `:memory:` opens its own empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema creation fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = if database_url.contains(":memory:") {
            // Never recycle the only connection, it owns the database
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_FILE_CONNECTIONS)
        };

        let pool = options.connect(database_url).await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create workout and exercise tables
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                kind TEXT NOT NULL,
                performed_at DATETIME NOT NULL,
                duration_minutes INTEGER NOT NULL,
                notes TEXT,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                sets INTEGER NOT NULL,
                reps INTEGER NOT NULL,
                weight_kg REAL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user ON workouts(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_workout ON exercises(workout_id)")
            .execute(&self.pool)
            .await?;

        debug!("Workout schema ready");
        Ok(())
    }

    /// Delete all exercises and workouts
    ///
    /// # Errors
    ///
    /// Returns an error if a delete fails
    pub async fn reset(&self) -> AppResult<()> {
        // Order matters due to foreign keys
        sqlx::query("DELETE FROM exercises")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM workouts")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Total number of stored workouts
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn workout_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Total number of stored exercises
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn exercise_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Exercises belonging to a workout, in name order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row holds a negative count
    pub async fn exercises_for_workout(&self, workout_id: &RecordId) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT name, sets, reps, weight_kg FROM exercises WHERE workout_id = ? ORDER BY name",
        )
        .bind(workout_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> AppResult<Exercise> {
                Ok(Exercise {
                    workout_id: workout_id.clone(),
                    name: row.try_get("name")?,
                    sets: count_column(row.try_get("sets")?, "sets")?,
                    reps: count_column(row.try_get("reps")?, "reps")?,
                    weight_kg: row.try_get("weight_kg")?,
                })
            })
            .collect()
    }
}

fn count_column(value: i64, column: &str) -> AppResult<u32> {
    u32::try_from(value).map_err(|_| {
        AppError::database(format!("{column} out of range: {value}"))
            .with_collection(collections::EXERCISES)
    })
}

#[async_trait]
impl RecordStore<Workout> for SqliteStore {
    async fn save(&self, record: Workout) -> AppResult<RecordId> {
        let id = RecordId::generate();

        sqlx::query(
            r"
            INSERT INTO workouts (id, user_id, name, kind, performed_at, duration_minutes, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(id.as_str())
        .bind(record.user_id.to_string())
        .bind(&record.name)
        .bind(record.kind.as_str())
        .bind(record.performed_at)
        .bind(i64::from(record.duration_minutes))
        .bind(&record.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from(e).with_collection(collections::WORKOUTS))?;

        Ok(id)
    }
}

#[async_trait]
impl RecordStore<Exercise> for SqliteStore {
    async fn save(&self, record: Exercise) -> AppResult<RecordId> {
        let id = RecordId::generate();

        sqlx::query(
            r"
            INSERT INTO exercises (id, workout_id, name, sets, reps, weight_kg)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(id.as_str())
        .bind(record.workout_id.as_str())
        .bind(&record.name)
        .bind(i64::from(record.sets))
        .bind(i64::from(record.reps))
        .bind(record.weight_kg)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from(e)
                .with_collection(collections::EXERCISES)
                .with_resource_id(record.workout_id.as_str())
        })?;

        Ok(id)
    }
}
