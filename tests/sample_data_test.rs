// ABOUTME: End-to-end tests for sample workout population against the in-memory store
// ABOUTME: Validates record counts, parent references, bodyweight entries, and duplicate writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{writer_for, CompletionProbe};
use fitlog_seeder::constants::collections;
use fitlog_seeder::models::{RecordId, Workout};
use fitlog_seeder::seeding::populate_sample_data;
use fitlog_seeder::store::InMemoryStore;
use uuid::Uuid;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sample_data_populates_sixteen_records() {
    let (writer, store) = writer_for(InMemoryStore::new());
    let probe = CompletionProbe::default();
    let user = Uuid::new_v4();

    let report = populate_sample_data(&writer, user, probe.callback())
        .wait()
        .await
        .unwrap();

    assert_eq!(probe.calls(), 1);
    assert_eq!(probe.last(), Some(true));
    assert_eq!(report.issued, 16);
    assert_eq!(store.count(collections::WORKOUTS), 4);
    assert_eq!(store.count(collections::EXERCISES), 12);

    for (workout_id, body) in store.documents(collections::WORKOUTS) {
        let workout: Workout = serde_json::from_value(body).unwrap();
        assert_eq!(workout.user_id, user);
        assert_eq!(store.exercises_for(&workout_id).unwrap().len(), 3);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_exactly_one_bodyweight_exercise_is_stored() {
    let (writer, store) = writer_for(InMemoryStore::new());

    populate_sample_data(&writer, Uuid::new_v4(), |_| {})
        .wait()
        .await
        .unwrap();

    let bodyweight: Vec<String> = store
        .documents(collections::EXERCISES)
        .into_iter()
        .filter(|(_, body)| body.get("weight_kg").is_none())
        .map(|(_, body)| body["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(bodyweight, vec!["Pull-Ups".to_owned()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_repeated_population_duplicates_records() {
    let (writer, store) = writer_for(InMemoryStore::new());
    let user = Uuid::new_v4();

    for _ in 0..2 {
        let report = populate_sample_data(&writer, user, |_| {})
            .wait()
            .await
            .unwrap();
        assert!(report.all_succeeded);
    }

    assert_eq!(store.count(collections::WORKOUTS), 8);
    assert_eq!(store.count(collections::EXERCISES), 24);

    let leg_days = store
        .documents(collections::WORKOUTS)
        .into_iter()
        .filter(|(_, body)| body["name"] == "Leg Day")
        .count();
    assert_eq!(leg_days, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_every_exercise_references_a_stored_workout() {
    let (writer, store) = writer_for(InMemoryStore::new());

    populate_sample_data(&writer, Uuid::new_v4(), |_| {})
        .wait()
        .await
        .unwrap();

    for (_, body) in store.documents(collections::EXERCISES) {
        let workout_id = RecordId::new(body["workout_id"].as_str().unwrap());
        assert!(store.contains_workout(&workout_id));
    }
}
