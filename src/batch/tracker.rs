// ABOUTME: Pending-operation counter that settles a batch exactly once
// ABOUTME: Atomic counter, aggregate success flag, and a one-shot completion slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BatchReport, WriteFailure, WriteTarget};
use crate::errors::{AppError, ErrorCode};
use crate::logging::WriteLogger;
use fitlog_core::models::RecordId;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

type SettleFn = Box<dyn FnOnce(BatchReport) + Send + 'static>;

/// Shared bookkeeping for one batch run
///
/// The pending counter starts at one: that unit is the issuing reservation
/// held by [`IssueGuard`]. Every issued operation adds one and releases it
/// when resolved. New operations can only be registered through a live guard
/// or a live [`PendingOp`], so once the counter reaches zero nothing can raise
/// it again and the completion slot is taken exactly once.
///
/// # Thread Safety
///
/// Counters and the success flag are atomics. Failures and the completion slot
/// sit behind mutexes that are only held for a push or a take.
pub struct PendingTracker {
    batch_id: String,
    pending: AtomicUsize,
    issued: AtomicUsize,
    succeeded: AtomicUsize,
    all_succeeded: AtomicBool,
    failures: Mutex<Vec<WriteFailure>>,
    on_settled: Mutex<Option<SettleFn>>,
}

impl PendingTracker {
    /// Start a batch; `on_settled` runs once, on whichever thread resolves last
    pub fn start<F>(on_settled: F) -> IssueGuard
    where
        F: FnOnce(BatchReport) + Send + 'static,
    {
        let tracker = Arc::new(Self {
            batch_id: Uuid::new_v4().simple().to_string(),
            pending: AtomicUsize::new(1),
            issued: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            all_succeeded: AtomicBool::new(true),
            failures: Mutex::new(Vec::new()),
            on_settled: Mutex::new(Some(Box::new(on_settled))),
        });
        IssueGuard { tracker }
    }

    /// Identifier used in log lines for this run
    #[must_use]
    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    /// Outstanding operations, including the issuing reservation if still held
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Operations issued so far
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    /// Whether every operation resolved so far succeeded
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.all_succeeded.load(Ordering::SeqCst)
    }

    /// Whether the completion callback has already been taken
    #[must_use]
    pub fn is_settled(&self) -> bool {
        lock_recovering(&self.on_settled).is_none()
    }

    fn issue(self: &Arc<Self>, target: WriteTarget) -> PendingOp {
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.issued.fetch_add(1, Ordering::SeqCst);
        WriteLogger::log_issued(&self.batch_id, &target.to_string());
        PendingOp {
            tracker: Arc::clone(self),
            target,
            resolved: false,
        }
    }

    fn record_success(&self, target: WriteTarget, record_id: &RecordId) {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
        WriteLogger::log_saved(&self.batch_id, &target.to_string(), record_id.as_str());
    }

    fn record_failure(&self, target: WriteTarget, code: ErrorCode, message: String) {
        self.all_succeeded.store(false, Ordering::SeqCst);
        WriteLogger::log_failed(&self.batch_id, &target.to_string(), &message);
        if let WriteTarget::Parent { group } = target {
            WriteLogger::log_children_skipped(&self.batch_id, group);
        }
        lock_recovering(&self.failures).push(WriteFailure {
            target,
            code,
            message,
        });
    }

    /// Release one unit; the caller that brings the count to zero settles
    fn release(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.settle();
        }
    }

    fn settle(&self) {
        let Some(on_settled) = lock_recovering(&self.on_settled).take() else {
            return;
        };

        let report = BatchReport {
            batch_id: self.batch_id.clone(),
            all_succeeded: self.all_succeeded(),
            issued: self.issued(),
            succeeded: self.succeeded.load(Ordering::SeqCst),
            failures: std::mem::take(&mut *lock_recovering(&self.failures)),
        };

        WriteLogger::log_batch_settled(
            &self.batch_id,
            report.issued,
            report.succeeded,
            report.all_succeeded,
        );
        on_settled(report);
    }
}

fn lock_recovering<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("Batch tracker lock poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Issuing reservation for a batch
///
/// Top-level operations are issued through the guard. Dropping it releases
/// the reservation, after which the batch settles as soon as every issued
/// operation has resolved.
pub struct IssueGuard {
    tracker: Arc<PendingTracker>,
}

impl IssueGuard {
    /// Register a new top-level operation
    #[must_use]
    pub fn issue(&self, target: WriteTarget) -> PendingOp {
        self.tracker.issue(target)
    }

    /// Shared tracker for inspection
    #[must_use]
    pub fn tracker(&self) -> &Arc<PendingTracker> {
        &self.tracker
    }
}

impl Drop for IssueGuard {
    fn drop(&mut self) {
        self.tracker.release();
    }
}

/// One outstanding write: `Pending -> Succeeded` or `Pending -> Failed`
///
/// Resolving consumes the operation. An operation dropped without being
/// resolved (its task panicked or was torn down) counts as failed, so the
/// pending counter always drains.
#[must_use = "a pending operation must be resolved with succeed() or fail()"]
pub struct PendingOp {
    tracker: Arc<PendingTracker>,
    target: WriteTarget,
    resolved: bool,
}

impl PendingOp {
    /// Which write this operation tracks
    #[must_use]
    pub const fn target(&self) -> WriteTarget {
        self.target
    }

    /// Register an operation that depends on this one
    ///
    /// Must be called before this operation is resolved, so the batch cannot
    /// settle between the parent resolving and its children being issued.
    pub fn issue_dependent(&self, target: WriteTarget) -> Self {
        self.tracker.issue(target)
    }

    /// Resolve as saved under `record_id`
    pub fn succeed(mut self, record_id: &RecordId) {
        self.resolved = true;
        self.tracker.record_success(self.target, record_id);
    }

    /// Resolve as failed
    pub fn fail(mut self, error: &AppError) {
        self.resolved = true;
        self.tracker
            .record_failure(self.target, error.code, error.message.clone());
    }
}

impl Drop for PendingOp {
    fn drop(&mut self) {
        if !self.resolved {
            self.tracker.record_failure(
                self.target,
                ErrorCode::InternalError,
                "operation dropped before resolving".to_owned(),
            );
        }
        self.tracker.release();
    }
}
