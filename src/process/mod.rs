use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::{status_code, ProcessExecutor};
pub use signal::InterruptFlag;

#[derive(Debug)]
pub enum ProcessError {
    /// The program could not be started.
    Spawn(std::io::Error),
    Wait(std::io::Error),
    SignalError(String),
}

impl ProcessError {
    /// Shell status for a launch that never produced an exit code.
    pub fn status(&self) -> i32 {
        match self {
            ProcessError::Spawn(e) if e.kind() == std::io::ErrorKind::NotFound => 127,
            ProcessError::Spawn(_) => 126,
            ProcessError::Wait(_) | ProcessError::SignalError(_) => 1,
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => match e.kind() {
                std::io::ErrorKind::NotFound => write!(f, "not found"),
                std::io::ErrorKind::PermissionDenied => write!(f, "Permission denied"),
                _ => write!(f, "{}", e),
            },
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
            ProcessError::SignalError(msg) => write!(f, "signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
