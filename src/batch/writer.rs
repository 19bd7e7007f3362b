// ABOUTME: Dependent batch writer: saves parents concurrently, then each parent's children
// ABOUTME: Aggregates every save into one report and one completion callback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::tracker::{PendingOp, PendingTracker};
use super::{BatchReport, DependentGroup, WriteTarget};
use crate::dispatch::CallbackQueue;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

/// Writes batches of dependent records against a [`RecordStore`]
///
/// Every save runs on its own Tokio task. Completion callbacks are delivered
/// on the writer's [`CallbackQueue`], never on a store worker thread.
pub struct DependentBatchWriter<S> {
    store: Arc<S>,
    callbacks: CallbackQueue,
}

impl<S> Clone for DependentBatchWriter<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<S> DependentBatchWriter<S>
where
    S: Send + Sync + 'static,
{
    /// Create a writer over `store`, delivering completions on `callbacks`
    #[must_use]
    pub const fn new(store: Arc<S>, callbacks: CallbackQueue) -> Self {
        Self { store, callbacks }
    }

    /// The store this writer saves to
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Start writing `groups` and return immediately
    ///
    /// Parents are saved concurrently. When a parent save succeeds its child
    /// generator runs with the assigned id and every child is saved
    /// concurrently; when it fails the generator is never called. After the
    /// last save resolves, `on_complete` runs once on the callback queue with
    /// `true` only if every issued save succeeded. Save failures are never
    /// returned to the caller; they are folded into the flag and the report.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use = "dropping the handle discards the report; the batch still runs"]
    pub fn populate<P, C, F>(&self, groups: Vec<DependentGroup<P, C>>, on_complete: F) -> BatchHandle
    where
        S: RecordStore<P> + RecordStore<C>,
        P: Send + 'static,
        C: Send + 'static,
        F: FnOnce(bool) + Send + 'static,
    {
        let (report_tx, report_rx) = oneshot::channel();
        let callbacks = self.callbacks.clone();

        let issuing = PendingTracker::start(move |report: BatchReport| {
            let all_succeeded = report.all_succeeded;
            callbacks.dispatch(move || {
                on_complete(all_succeeded);
                // Receiver may have been dropped by a caller that only wanted the callback
                let _ = report_tx.send(report);
            });
        });
        let batch_id = issuing.tracker().batch_id().to_owned();
        debug!(batch.id = %batch_id, batch.groups = groups.len(), "Populating batch");

        for (group, dependent_group) in groups.into_iter().enumerate() {
            let op = issuing.issue(WriteTarget::Parent { group });
            tokio::spawn(save_group(Arc::clone(&self.store), dependent_group, op));
        }
        drop(issuing);

        BatchHandle {
            batch_id,
            report: report_rx,
        }
    }

    /// Write `groups` and wait for the aggregate report
    ///
    /// # Errors
    ///
    /// Returns an error only if the report could not be delivered; save
    /// failures are reported inside the `BatchReport`
    pub async fn populate_and_wait<P, C>(
        &self,
        groups: Vec<DependentGroup<P, C>>,
    ) -> AppResult<BatchReport>
    where
        S: RecordStore<P> + RecordStore<C>,
        P: Send + 'static,
        C: Send + 'static,
    {
        self.populate(groups, |_| {}).wait().await
    }
}

async fn save_group<S, P, C>(store: Arc<S>, group: DependentGroup<P, C>, op: PendingOp)
where
    S: RecordStore<P> + RecordStore<C> + 'static,
    P: Send + 'static,
    C: Send + 'static,
{
    let (parent, children) = group.into_parts();
    let group_index = op.target().group();

    match RecordStore::<P>::save(store.as_ref(), parent).await {
        Ok(parent_id) => {
            for (index, child) in children(&parent_id).into_iter().enumerate() {
                let child_op = op.issue_dependent(WriteTarget::Child {
                    group: group_index,
                    index,
                });
                tokio::spawn(save_child(Arc::clone(&store), child, child_op));
            }
            op.succeed(&parent_id);
        }
        Err(error) => op.fail(&error),
    }
}

async fn save_child<S, C>(store: Arc<S>, child: C, op: PendingOp)
where
    S: RecordStore<C> + 'static,
    C: Send + 'static,
{
    match store.save(child).await {
        Ok(child_id) => op.succeed(&child_id),
        Err(error) => op.fail(&error),
    }
}

/// Handle to a running batch
pub struct BatchHandle {
    batch_id: String,
    report: oneshot::Receiver<BatchReport>,
}

impl BatchHandle {
    /// Identifier used in log lines for this run
    #[must_use]
    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    /// Wait until the completion callback has run and return the report
    ///
    /// # Errors
    ///
    /// Returns an internal error if the completion callback panicked before
    /// the report was handed over
    pub async fn wait(self) -> AppResult<BatchReport> {
        self.report.await.map_err(|_| {
            AppError::internal("batch completion was dropped before the report was delivered")
                .with_resource_id(self.batch_id)
        })
    }
}
