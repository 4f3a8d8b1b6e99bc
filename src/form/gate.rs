/// Submission gate - at most one prediction request in flight per form
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

pub struct SubmissionGate {
    semaphore: Arc<Semaphore>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
        }
    }

    /// Take the gate without waiting; `None` while another submission holds it
    pub fn try_acquire(&self) -> Option<SubmissionGuard> {
        self.semaphore
            .clone()
            .try_acquire_owned()
            .ok()
            .map(|permit| SubmissionGuard { _permit: permit })
    }

    pub fn is_busy(&self) -> bool {
        self.semaphore.available_permits() == 0
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard returned by [`SubmissionGate::try_acquire`]
pub struct SubmissionGuard {
    _permit: OwnedSemaphorePermit,
}
