// src/exit.rs
//! Process exit codes for `percolate`.
//!
//! Scripts may rely on 0 vs non-0; the specific codes help debugging.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PercolateExit {
    /// Run completed and results were printed.
    Success = 0,
    /// Generic error (I/O, config, serialization).
    Error = 1,
    /// Invalid grid size or trial count.
    InvalidInput = 2,
}

impl PercolateExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for PercolateExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
