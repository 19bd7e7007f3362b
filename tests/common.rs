// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging setup and a scripted, fault-injecting record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::panic
)]
//! Shared test utilities for `fitlog_seeder`

use async_trait::async_trait;
use fitlog_seeder::batch::DependentBatchWriter;
use fitlog_seeder::dispatch::CallbackQueue;
use fitlog_seeder::errors::{AppError, AppResult};
use fitlog_seeder::models::{Exercise, RecordId, Workout};
use fitlog_seeder::store::RecordStore;
use std::collections::{HashMap, HashSet};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// How the scripted store treats a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Save normally
    Succeed,
    /// Return a storage error
    Fail,
    /// Panic inside the save
    Panic,
}

/// Record store that records every attempt and fails on demand
///
/// Saves sleep for a small name-derived delay so concurrent saves resolve
/// out of submission order.
#[derive(Default)]
pub struct ScriptedStore {
    scripts: HashMap<String, Script>,
    workout_attempts: Mutex<Vec<String>>,
    exercise_attempts: Mutex<Vec<(RecordId, String)>>,
    saved_workouts: Mutex<HashMap<RecordId, String>>,
    ordering_violations: Mutex<Vec<String>>,
    total_attempts: AtomicUsize,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the save of the record named `name`
    pub fn with_script(mut self, name: &str, script: Script) -> Self {
        self.scripts.insert(name.to_owned(), script);
        self
    }

    fn script_for(&self, name: &str) -> Script {
        self.scripts.get(name).copied().unwrap_or(Script::Succeed)
    }

    async fn jitter(name: &str) {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        tokio::time::sleep(Duration::from_millis(hasher.finish() % 15)).await;
    }

    pub fn total_attempts(&self) -> usize {
        self.total_attempts.load(Ordering::SeqCst)
    }

    pub fn workout_attempts(&self) -> Vec<String> {
        self.workout_attempts.lock().unwrap().clone()
    }

    pub fn workout_attempts_named(&self, name: &str) -> usize {
        self.workout_attempts()
            .iter()
            .filter(|attempt| attempt.as_str() == name)
            .count()
    }

    pub fn exercise_attempts(&self) -> Vec<(RecordId, String)> {
        self.exercise_attempts.lock().unwrap().clone()
    }

    /// Exercise attempts whose parent workout has the given name
    pub fn exercise_attempts_for_workout(&self, workout_name: &str) -> usize {
        let saved = self.saved_workouts.lock().unwrap().clone();
        self.exercise_attempts()
            .iter()
            .filter(|(workout_id, _)| saved.get(workout_id).map(String::as_str) == Some(workout_name))
            .count()
    }

    pub fn saved_workout_names(&self) -> HashSet<String> {
        self.saved_workouts.lock().unwrap().values().cloned().collect()
    }

    pub fn ordering_violations(&self) -> Vec<String> {
        self.ordering_violations.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore<Workout> for ScriptedStore {
    async fn save(&self, record: Workout) -> AppResult<RecordId> {
        self.total_attempts.fetch_add(1, Ordering::SeqCst);
        self.workout_attempts.lock().unwrap().push(record.name.clone());
        Self::jitter(&record.name).await;

        match self.script_for(&record.name) {
            Script::Succeed => {
                let id = RecordId::generate();
                self.saved_workouts
                    .lock()
                    .unwrap()
                    .insert(id.clone(), record.name);
                Ok(id)
            }
            Script::Fail => Err(AppError::external_service("scripted", "workout rejected")),
            Script::Panic => panic!("scripted panic saving {}", record.name),
        }
    }
}

#[async_trait]
impl RecordStore<Exercise> for ScriptedStore {
    async fn save(&self, record: Exercise) -> AppResult<RecordId> {
        self.total_attempts.fetch_add(1, Ordering::SeqCst);
        if !self
            .saved_workouts
            .lock()
            .unwrap()
            .contains_key(&record.workout_id)
        {
            self.ordering_violations
                .lock()
                .unwrap()
                .push(format!("{} arrived before its workout", record.name));
        }
        self.exercise_attempts
            .lock()
            .unwrap()
            .push((record.workout_id.clone(), record.name.clone()));
        Self::jitter(&record.name).await;

        match self.script_for(&record.name) {
            Script::Succeed => Ok(RecordId::generate()),
            Script::Fail => Err(AppError::storage("exercise rejected")),
            Script::Panic => panic!("scripted panic saving {}", record.name),
        }
    }
}

/// Writer over `store` with a fresh callback queue
pub fn writer_for<S>(store: S) -> (DependentBatchWriter<S>, Arc<S>)
where
    S: Send + Sync + 'static,
{
    init_test_logging();
    let store = Arc::new(store);
    (
        DependentBatchWriter::new(Arc::clone(&store), CallbackQueue::spawn()),
        store,
    )
}

/// Completion callback that counts invocations and remembers the last flag
#[derive(Clone, Default)]
pub struct CompletionProbe {
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<bool>>>,
}

impl CompletionProbe {
    pub fn callback(&self) -> impl FnOnce(bool) + Send + 'static {
        let calls = Arc::clone(&self.calls);
        let last = Arc::clone(&self.last);
        move |all_succeeded| {
            calls.fetch_add(1, Ordering::SeqCst);
            *last.lock().unwrap() = Some(all_succeeded);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<bool> {
        *self.last.lock().unwrap()
    }
}
