use tracing::debug;

use crate::engine::error::EngineError;
use crate::engine::inventory::Inventory;
use crate::world::{Destination, FORCED_DIRECTION, Passage, Room, World};

/// Where `direction` leads from `room`, if anywhere.
///
/// The word goes through the synonym table first. Passages are scanned in
/// declaration order; a keyed passage whose key isn't carried is skipped,
/// so a later passage with the same direction can still match. `Ok(None)`
/// means nothing is traversable that way right now.
pub fn next_room(
    world: &World,
    room: &Room,
    direction: &str,
    inventory: &Inventory,
) -> Result<Option<Destination>, EngineError> {
    let direction = world.vocabulary().resolve(direction);
    find_passage(world, room, &direction, inventory)
}

/// The forced passage to follow on entering `room`, if one is open.
pub fn forced_destination(
    world: &World,
    room: &Room,
    inventory: &Inventory,
) -> Result<Option<Destination>, EngineError> {
    find_passage(world, room, FORCED_DIRECTION, inventory)
}

fn find_passage(
    world: &World,
    room: &Room,
    direction: &str,
    inventory: &Inventory,
) -> Result<Option<Destination>, EngineError> {
    for passage in room.passages.iter().filter(|p| p.direction == direction) {
        if traversable(world, room, passage, inventory)? {
            debug!(
                room = %room.name,
                direction,
                destination = %passage.destination,
                "passage open"
            );
            return Ok(Some(passage.destination.clone()));
        }
    }
    Ok(None)
}

fn traversable(
    world: &World,
    room: &Room,
    passage: &Passage,
    inventory: &Inventory,
) -> Result<bool, EngineError> {
    let Some(key) = &passage.key else {
        return Ok(true);
    };
    let key_object = world.object(key).ok_or_else(|| EngineError::IllegalKey {
        room: room.name.clone(),
        key: key.clone(),
    })?;
    Ok(inventory.contains(&key_object.name))
}
