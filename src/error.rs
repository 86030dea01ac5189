use crate::types::EncodingId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for launcher operations
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Errors raised while launching or probing
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The exec of the target failed, so this process is still running
    #[error("unable to replace process with {target:?}")]
    ReplacementFailed {
        /// The executable that could not be started
        target: PathBuf,
        /// The OS error from the exec call
        #[source]
        source: io::Error,
    },

    /// The platform refused the converter cache refresh
    #[error("converter cache could not be reinitialized for encoding {0}")]
    ConverterReinitFailed(EncodingId),

    /// The probed executable was started but its output could not be collected
    #[error("unable to run {path:?} to probe its state")]
    ProbeFailed {
        /// The executable being probed
        path: PathBuf,
        /// The OS error from waiting on it
        #[source]
        source: io::Error,
    },

    /// The launcher could not be copied into place
    #[error("unable to install launcher at {path:?}")]
    InstallFailed {
        /// The destination of the copy
        path: PathBuf,
        /// The OS error from copying or changing permissions
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit status to report when this error ends the process.
    ///
    /// A failed exec follows the shell convention: 127 when the target could not be found,
    /// 126 otherwise. Errors that never come from an exec report 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ReplacementFailed { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 127,
                _ => 126,
            },
            LaunchError::ConverterReinitFailed(_)
            | LaunchError::ProbeFailed { .. }
            | LaunchError::InstallFailed { .. } => 1,
        }
    }
}
