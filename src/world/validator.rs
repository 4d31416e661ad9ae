use thiserror::Error;

use super::model::{Destination, ObjectLocation, START_ROOM, World};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Check every name reference in the world, in declaration order.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // START is the alias of the first room; a later room may not claim it
    for (idx, room) in world.rooms().enumerate() {
        if idx > 0 && room.name == START_ROOM {
            errors.push(ValidationError::new(format!(
                "room name '{}' is reserved for the first room",
                START_ROOM
            )));
        }
    }

    // Passages: destination rooms and key objects must exist
    for room in world.rooms() {
        for passage in &room.passages {
            if let Destination::Room(target) = &passage.destination {
                if world.room(target).is_none() {
                    errors.push(ValidationError::new(format!(
                        "room '{}' passage '{}' leads to missing room '{}'",
                        room.name, passage.direction, target
                    )));
                }
            }

            if let Some(key) = &passage.key {
                if world.object(key).is_none() {
                    errors.push(ValidationError::new(format!(
                        "room '{}' passage '{}' requires missing key object '{}'",
                        room.name, passage.direction, key
                    )));
                }
            }

            if passage.direction.is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has a passage with an empty direction",
                    room.name
                )));
            }
        }
    }

    // Objects must start somewhere real
    for obj in world.objects() {
        if obj.name.is_empty() {
            errors.push(ValidationError::new("an object has an empty name"));
        }
        if let ObjectLocation::Room(room_name) = &obj.location {
            if world.room(room_name).is_none() {
                errors.push(ValidationError::new(format!(
                    "object '{}' starts in missing room '{}'",
                    obj.name, room_name
                )));
            }
        }
    }

    errors
}
