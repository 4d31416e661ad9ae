use std::io;

use thiserror::Error;

/// Hard failures during play. None of these are shown as in-game text: a
/// reference that doesn't resolve means the world itself is broken.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("illegal passage from {from}: room '{to}' does not exist")]
    IllegalPassage { from: String, to: String },

    #[error("illegal key name '{key}' on a passage from {room}")]
    IllegalKey { room: String, key: String },

    #[error("current room '{0}' does not exist")]
    MissingRoom(String),

    #[error("the session has already terminated")]
    Terminated,

    #[error("I/O port failure: {0}")]
    Port(#[from] io::Error),
}
