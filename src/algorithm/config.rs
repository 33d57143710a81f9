use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What happens to a queued record once its vertex gets a shorter distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Leave the superseded record in the heap and skip it when it is popped
    #[default]
    Lazy,
    /// Remove the superseded record from the heap right away
    Evict,
}

/// Per-run settings shared by every shortest path entry point
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// How superseded queue records are handled
    pub stale_policy: StalePolicy,

    /// Reject graphs with negative weights before running
    pub validate_weights: bool,

    /// Initial capacity of the per-run heap
    pub heap_capacity: usize,

    /// Raised by another thread to abort a run with `Error::Interrupted`
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl SearchConfig {
    /// Create a config with default settings (lazy, unvalidated, uncancellable)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stale record policy
    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Enable or disable the negative weight check
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Set the heap capacity hint
    pub fn with_heap_capacity(mut self, capacity: usize) -> Self {
        self.heap_capacity = capacity;
        self
    }

    /// Attach a cancellation flag
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}
