// ABOUTME: Dependent batch writing: parent records first, then children needing the parent id
// ABOUTME: Shared batch types (groups, write targets, failures, aggregate report)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dependent Batch Writes
//!
//! A batch is a list of [`DependentGroup`]s. Each group holds a parent record
//! and a generator for child records that can only be built once the store
//! has assigned the parent an identifier. The [`DependentBatchWriter`] saves
//! every parent concurrently, fans out each group's children after its parent
//! resolves, and reports a single aggregate outcome exactly once.
//!
//! Failures never abort the batch. A failed parent skips its own children and
//! nothing else; a failed child affects nobody. Everything is folded into a
//! [`BatchReport`].

/// Pending-operation counter and completion latch
pub mod tracker;
/// Batch writer orchestrating parent-then-children saves
pub mod writer;

pub use tracker::{IssueGuard, PendingOp, PendingTracker};
pub use writer::{BatchHandle, DependentBatchWriter};

use crate::errors::ErrorCode;
use fitlog_core::models::RecordId;
use serde::Serialize;
use std::fmt;

/// Generator for a group's children, given the parent's assigned id
pub type ChildFactory<C> = Box<dyn FnOnce(&RecordId) -> Vec<C> + Send + 'static>;

/// A parent record plus the children that depend on its identifier
pub struct DependentGroup<P, C> {
    parent: P,
    children: ChildFactory<C>,
}

impl<P, C> DependentGroup<P, C> {
    /// Create a group; `children` runs only if the parent save succeeds
    pub fn new<F>(parent: P, children: F) -> Self
    where
        F: FnOnce(&RecordId) -> Vec<C> + Send + 'static,
    {
        Self {
            parent,
            children: Box::new(children),
        }
    }

    /// Create a group with no dependent records
    pub fn parent_only(parent: P) -> Self {
        Self::new(parent, |_| Vec::new())
    }

    /// Borrow the parent record
    pub const fn parent(&self) -> &P {
        &self.parent
    }

    /// Split into the parent and the child generator
    pub fn into_parts(self) -> (P, ChildFactory<C>) {
        (self.parent, self.children)
    }
}

impl<P: fmt::Debug, C> fmt::Debug for DependentGroup<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependentGroup")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Position of a single write inside a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum WriteTarget {
    /// The parent record of group `group`
    Parent {
        /// Group index in submission order
        group: usize,
    },
    /// Child `index` of group `group`
    Child {
        /// Group index in submission order
        group: usize,
        /// Child index in generator order
        index: usize,
    },
}

impl WriteTarget {
    /// Group this write belongs to
    #[must_use]
    pub const fn group(&self) -> usize {
        match self {
            Self::Parent { group } | Self::Child { group, .. } => *group,
        }
    }

    /// Whether this is a parent write
    #[must_use]
    pub const fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }
}

impl fmt::Display for WriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent { group } => write!(f, "group[{group}].parent"),
            Self::Child { group, index } => write!(f, "group[{group}].child[{index}]"),
        }
    }
}

/// A write that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    /// Which write failed
    pub target: WriteTarget,
    /// Error category reported by the store
    pub code: ErrorCode,
    /// Error message reported by the store
    pub message: String,
}

/// Aggregate outcome of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Identifier used to correlate log lines for this run
    pub batch_id: String,
    /// True only if every issued write succeeded
    pub all_succeeded: bool,
    /// Number of writes handed to the store
    pub issued: usize,
    /// Number of writes the store confirmed
    pub succeeded: usize,
    /// Every failed write, in resolution order
    pub failures: Vec<WriteFailure>,
}

impl BatchReport {
    /// Number of failed writes
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Groups whose parent failed, so none of their children were issued
    #[must_use]
    pub fn skipped_groups(&self) -> Vec<usize> {
        let mut groups: Vec<usize> = self
            .failures
            .iter()
            .filter(|failure| failure.target.is_parent())
            .map(|failure| failure.target.group())
            .collect();
        groups.sort_unstable();
        groups
    }
}
