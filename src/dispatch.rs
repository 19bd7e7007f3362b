// ABOUTME: Serial callback queue used as the designated completion context
// ABOUTME: Runs boxed jobs one at a time on a dedicated task, in submission order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Callback Queue
//!
//! Store saves resolve on arbitrary runtime worker threads. Completion
//! callbacks instead run on a [`CallbackQueue`]: a single task draining a
//! channel, so callbacks never overlap each other and observe a consistent
//! order, the same guarantee a UI main queue gives.

use tokio::sync::mpsc;
use tracing::{debug, warn};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a serial job queue
///
/// Clones share the same underlying queue. The draining task stops once
/// every handle has been dropped and the backlog is empty.
#[derive(Clone)]
pub struct CallbackQueue {
    sender: mpsc::UnboundedSender<Job>,
}

impl CallbackQueue {
    /// Start the queue on the current Tokio runtime
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        tokio::spawn(async move {
            while let Some(job) = receiver.recv().await {
                job();
            }
            debug!("Callback queue drained and closed");
        });

        Self { sender }
    }

    /// Enqueue a job without waiting for it to run
    ///
    /// If the draining task is gone (runtime shutting down) the job runs
    /// inline on the caller's thread so it is never silently lost.
    pub fn dispatch<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Err(mpsc::error::SendError(job)) = self.sender.send(Box::new(job)) {
            warn!("Callback queue closed, running job inline");
            job();
        }
    }
}
