use std::io;

use thiserror::Error;

use super::validator::ValidationError;

/// Why a world could not be loaded. All of these are fatal: the world data
/// is missing or broken and no session can start from it.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed world file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("world has no rooms")]
    NoRooms,

    #[error("duplicate room name '{0}'")]
    DuplicateRoom(String),

    #[error("duplicate object name '{0}'")]
    DuplicateObject(String),

    #[error("world failed validation: {}", join_problems(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_problems(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
