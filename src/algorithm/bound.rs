//! Values shared between parallel search workers
//!
//! Both are owned by the search driver and lent to workers by reference; neither
//! lives in process-wide state.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Best total weight found by any worker, only ever decreasing
#[derive(Debug)]
pub struct SharedBound {
    best: AtomicU64,
}

impl Default for SharedBound {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedBound {
    /// Create an unset bound (+∞)
    pub const fn new() -> Self {
        Self {
            best: AtomicU64::new(u64::MAX),
        }
    }

    /// Current bound, `u64::MAX` while no assignment has been found
    pub fn get(&self) -> u64 {
        self.best.load(Ordering::Acquire)
    }

    /// Whether any worker has reported an assignment
    pub fn is_set(&self) -> bool {
        self.get() != u64::MAX
    }

    /// Lower the bound to `weight` if it is strictly lower than the current value
    ///
    /// Returns whether the bound changed.
    pub fn tighten(&self, weight: u64) -> bool {
        let mut current = self.best.load(Ordering::Acquire);
        while weight < current {
            match self.best.compare_exchange_weak(
                current,
                weight,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
        false
    }
}

/// Lowest top-level branch that has produced a feasible assignment
///
/// Branches ordered after it can no longer supply the answer and stop early.
#[derive(Debug)]
pub struct FirstHit {
    branch: AtomicUsize,
}

impl Default for FirstHit {
    fn default() -> Self {
        Self::new()
    }
}

impl FirstHit {
    /// Create with no branch recorded
    pub const fn new() -> Self {
        Self {
            branch: AtomicUsize::new(usize::MAX),
        }
    }

    /// Record that `branch` found an assignment
    pub fn record(&self, branch: usize) {
        self.branch.fetch_min(branch, Ordering::AcqRel);
    }

    /// Lowest branch recorded so far
    pub fn lowest(&self) -> Option<usize> {
        let branch = self.branch.load(Ordering::Acquire);
        (branch != usize::MAX).then_some(branch)
    }

    /// Whether an earlier branch already found an assignment
    pub fn beaten(&self, branch: usize) -> bool {
        self.branch.load(Ordering::Acquire) < branch
    }
}
