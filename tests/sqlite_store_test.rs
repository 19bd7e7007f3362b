// ABOUTME: Integration tests for the SQLite record store
// ABOUTME: Covers schema creation, foreign keys, reset, and seeding through the batch writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::{init_test_logging, writer_for};
use fitlog_seeder::errors::ErrorCode;
use fitlog_seeder::models::{Exercise, RecordId, Workout, WorkoutKind};
use fitlog_seeder::seeding::populate_sample_data;
use fitlog_seeder::store::{RecordStore, SqliteStore};
use uuid::Uuid;

async fn memory_store() -> SqliteStore {
    init_test_logging();
    SqliteStore::connect("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn test_workout_and_exercises_round_trip() {
    let store = memory_store().await;
    let workout = Workout::new(Uuid::new_v4(), "Leg Day", WorkoutKind::Strength, Utc::now(), 60);
    let workout_id = store.save(workout).await.unwrap();

    store
        .save(Exercise::weighted(workout_id.clone(), "Back Squat", 5, 5, 83.9))
        .await
        .unwrap();
    store
        .save(Exercise::bodyweight(workout_id.clone(), "Air Squat", 2, 20))
        .await
        .unwrap();

    let exercises = store.exercises_for_workout(&workout_id).await.unwrap();
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0].name, "Air Squat");
    assert!(exercises[0].is_bodyweight());
    assert_eq!(exercises[1].sets, 5);
    assert!((exercises[1].weight_kg.unwrap() - 83.9).abs() < 1e-9);
}

#[tokio::test]
async fn test_exercise_without_workout_is_rejected() {
    let store = memory_store().await;
    let orphan = Exercise::bodyweight(RecordId::new("missing"), "Pull-Ups", 3, 10);

    let err = RecordStore::<Exercise>::save(&store, orphan).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert_eq!(err.context.collection.as_deref(), Some("exercises"));
    assert_eq!(store.exercise_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_reset_clears_all_rows() {
    let store = memory_store().await;
    let workout = Workout::new(Uuid::new_v4(), "Cardio", WorkoutKind::Cardio, Utc::now(), 30);
    let workout_id = store.save(workout).await.unwrap();
    store
        .save(Exercise::bodyweight(workout_id, "Jump Rope", 5, 100))
        .await
        .unwrap();

    store.reset().await.unwrap();
    assert_eq!(store.workout_count().await.unwrap(), 0);
    assert_eq!(store.exercise_count().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sample_population_into_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}?mode=rwc", dir.path().join("fitlog.db").display());
    let store = SqliteStore::connect(&url).await.unwrap();
    let (writer, store) = writer_for(store);

    let report = populate_sample_data(&writer, Uuid::new_v4(), |_| {})
        .wait()
        .await
        .unwrap();

    assert!(report.all_succeeded, "failures: {:?}", report.failures);
    assert_eq!(store.workout_count().await.unwrap(), 4);
    assert_eq!(store.exercise_count().await.unwrap(), 12);

    let weighted: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM exercises WHERE weight_kg IS NOT NULL")
            .fetch_one(store.pool())
            .await
            .unwrap();
    assert_eq!(weighted, 11);
}

#[tokio::test]
async fn test_migrate_is_repeatable() {
    let store = memory_store().await;
    store.migrate().await.unwrap();
    assert_eq!(store.workout_count().await.unwrap(), 0);
}
