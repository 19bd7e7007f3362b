// ABOUTME: In-memory document store keyed by collection and generated record id
// ABOUTME: Used for dry runs and tests; enforces that exercises reference saved workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use dashmap::DashMap;
use fitlog_core::constants::collections;
use fitlog_core::models::{Exercise, RecordId, Workout};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Stored document with the collection it belongs to
#[derive(Debug, Clone)]
struct StoredDocument {
    collection: &'static str,
    body: Value,
}

/// Document store held entirely in memory
///
/// Cloning is cheap and every clone shares the same documents, so the store
/// can be handed to the writer and inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<DashMap<RecordId, StoredDocument>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert<T: Serialize>(&self, collection: &'static str, record: &T) -> AppResult<RecordId> {
        let body = serde_json::to_value(record)
            .map_err(|e| AppError::from(e).with_collection(collection))?;
        let id = RecordId::generate();
        self.documents
            .insert(id.clone(), StoredDocument { collection, body });
        Ok(id)
    }

    /// Number of documents in a collection
    #[must_use]
    pub fn count(&self, collection: &str) -> usize {
        self.documents
            .iter()
            .filter(|entry| entry.value().collection == collection)
            .count()
    }

    /// Snapshot of every document in a collection
    #[must_use]
    pub fn documents(&self, collection: &str) -> Vec<(RecordId, Value)> {
        self.documents
            .iter()
            .filter(|entry| entry.value().collection == collection)
            .map(|entry| (entry.key().clone(), entry.value().body.clone()))
            .collect()
    }

    /// Whether a workout with this id has been saved
    #[must_use]
    pub fn contains_workout(&self, workout_id: &RecordId) -> bool {
        self.documents
            .get(workout_id)
            .is_some_and(|doc| doc.collection == collections::WORKOUTS)
    }

    /// Exercises saved against a workout
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a stored document no longer decodes
    pub fn exercises_for(&self, workout_id: &RecordId) -> AppResult<Vec<Exercise>> {
        self.documents(collections::EXERCISES)
            .into_iter()
            .map(|(_, body)| serde_json::from_value::<Exercise>(body))
            .filter(|decoded| {
                decoded
                    .as_ref()
                    .map_or(true, |exercise| &exercise.workout_id == workout_id)
            })
            .map(|decoded| decoded.map_err(AppError::from))
            .collect()
    }

    /// Remove every document
    pub fn clear(&self) {
        self.documents.clear();
    }
}

#[async_trait]
impl RecordStore<Workout> for InMemoryStore {
    async fn save(&self, record: Workout) -> AppResult<RecordId> {
        self.insert(collections::WORKOUTS, &record)
    }
}

#[async_trait]
impl RecordStore<Exercise> for InMemoryStore {
    async fn save(&self, record: Exercise) -> AppResult<RecordId> {
        if !self.contains_workout(&record.workout_id) {
            return Err(AppError::not_found(format!("Workout {}", record.workout_id))
                .with_collection(collections::EXERCISES)
                .with_resource_id(record.workout_id.as_str()));
        }
        self.insert(collections::EXERCISES, &record)
    }
}
