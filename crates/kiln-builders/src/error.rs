//! Builder construction and command errors.

use std::process::ExitStatus;

use kiln_targets::{App, Board, ParamKey, PlatformKind};
use thiserror::Error;

/// Errors from builder construction and from driving build commands.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{platform}: missing required parameter: {what}")]
    MissingParameter {
        platform: PlatformKind,
        what: &'static str,
    },

    #[error("{platform}: unexpected parameter: {key}")]
    UnexpectedParameter {
        platform: PlatformKind,
        key: ParamKey,
    },

    #[error("{platform}: unsupported board: {board}")]
    UnsupportedBoard {
        platform: PlatformKind,
        board: Board,
    },

    #[error("{platform}: unsupported app: {app}")]
    UnsupportedApp { platform: PlatformKind, app: App },

    #[error("{platform}: board {board} cannot build app {app}")]
    IncompatibleCombination {
        platform: PlatformKind,
        board: Board,
        app: App,
    },

    #[error("{title} exited with {status}")]
    CommandFailed { title: String, status: ExitStatus },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, BuildError>;
