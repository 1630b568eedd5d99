use std::io;

use thiserror::Error;

/// Failures raised by the terminal frontend.
///
/// Simulation outcomes (wall or self collision) are ordinary state
/// transitions surfaced through [`crate::engine::GameStatus`], never errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Terminal setup, drawing, or event polling failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),

    /// A CLI option carried a value outside its accepted range.
    #[error("invalid {option} value {value}: {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: &'static str,
    },
}
