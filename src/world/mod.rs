mod error;
mod loader;
mod model;
mod validator;
mod vocabulary;

pub use error::WorldError;
pub use loader::{load_world_from_file, load_world_from_str};

pub use model::{
    AdvObject, Destination, EXIT_ROOM, FORCED_DIRECTION, ObjectLocation, PLAYER_LOCATION, Passage,
    Room, START_ROOM, World,
};
pub use validator::{ValidationError, validate_world};
pub use vocabulary::Vocabulary;
