use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGINT;

use crate::process::ProcessError;

/// Set by SIGINT, consumed by the input reader. While the handler is
/// installed a Ctrl-C no longer terminates the shell; children get the
/// default disposition back when they exec.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self) -> Result<(), ProcessError> {
        signal_hook::flag::register(SIGINT, Arc::clone(&self.raised))
            .map(|_| ())
            .map_err(|e| ProcessError::SignalError(e.to_string()))
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Clears the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }
}
