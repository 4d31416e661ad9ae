use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use super::error::WorldError;
use super::validator::validate_world;
use super::vocabulary::Vocabulary;
use crate::engine::Inventory;

/// Alias under which the first declared room is also reachable.
pub const START_ROOM: &str = "START";
/// Passage destination that ends the game.
pub const EXIT_ROOM: &str = "EXIT";
/// Object location meaning "starts in the player's inventory".
pub const PLAYER_LOCATION: &str = "PLAYER";
/// Direction word of passages that are followed without player input.
pub const FORCED_DIRECTION: &str = "forced";

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Room(String),
    Exit,
}

impl Destination {
    pub fn parse(raw: &str) -> Self {
        if raw == EXIT_ROOM {
            Destination::Exit
        } else {
            Destination::Room(raw.to_string())
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Room(name) => f.write_str(name),
            Destination::Exit => f.write_str(EXIT_ROOM),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub direction: String,
    pub destination: Destination,
    pub key: Option<String>,
}

impl Passage {
    /// Direction and key are stored in canonical lowercase form; an empty
    /// key means the passage is unconditional.
    pub fn new(direction: &str, destination: Destination, key: Option<&str>) -> Self {
        Passage {
            direction: direction.trim().to_lowercase(),
            destination,
            key: key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_lowercase),
        }
    }

    pub fn is_forced(&self) -> bool {
        self.direction == FORCED_DIRECTION
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub short: Option<String>,
    pub long: String,
    pub passages: Vec<Passage>,
    visited: bool,
    contents: Vec<String>,
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        short: Option<String>,
        long: impl Into<String>,
        passages: Vec<Passage>,
    ) -> Self {
        Room {
            name: name.into(),
            short,
            long: long.into(),
            passages,
            visited: false,
            contents: Vec::new(),
        }
    }

    pub fn has_been_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Object names currently in the room, in the order they arrived.
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn contains(&self, object: &str) -> bool {
        self.contents.iter().any(|o| o == object)
    }

    pub fn add_object(&mut self, object: impl Into<String>) {
        self.contents.push(object.into());
    }

    /// Returns false if the object was not here.
    pub fn remove_object(&mut self, object: &str) -> bool {
        match self.contents.iter().position(|o| o == object) {
            Some(idx) => {
                self.contents.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectLocation {
    Room(String),
    Player,
}

impl ObjectLocation {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == PLAYER_LOCATION {
            ObjectLocation::Player
        } else {
            ObjectLocation::Room(raw.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvObject {
    pub name: String,
    pub description: String,
    pub location: ObjectLocation,
}

impl AdvObject {
    pub fn new(name: &str, description: impl Into<String>, location: ObjectLocation) -> Self {
        AdvObject {
            name: name.trim().to_lowercase(),
            description: description.into(),
            location,
        }
    }
}

/// Runtime world: every room, object and synonym, indexed by name.
///
/// Rooms keep their declaration order for iteration. The first room is
/// additionally reachable as [`START_ROOM`].
#[derive(Debug, Clone)]
pub struct World {
    name: String,
    rooms: HashMap<String, Room>,
    room_order: Vec<String>,
    objects: HashMap<String, AdvObject>,
    object_order: Vec<String>,
    vocabulary: Vocabulary,
}

impl World {
    /// Build a world and check every cross reference.
    ///
    /// A passage that leads nowhere or needs a key that doesn't exist is a
    /// broken world, so this fails instead of deferring to play time.
    pub fn new(
        name: impl Into<String>,
        rooms: Vec<Room>,
        objects: Vec<AdvObject>,
        vocabulary: Vocabulary,
    ) -> Result<World, WorldError> {
        if rooms.is_empty() {
            return Err(WorldError::NoRooms);
        }

        let mut rooms_map: HashMap<String, Room> = HashMap::new();
        let mut room_order = Vec::with_capacity(rooms.len());
        for room in rooms {
            if rooms_map.contains_key(&room.name) {
                return Err(WorldError::DuplicateRoom(room.name));
            }
            room_order.push(room.name.clone());
            rooms_map.insert(room.name.clone(), room);
        }

        let mut objects_map: HashMap<String, AdvObject> = HashMap::new();
        let mut object_order = Vec::with_capacity(objects.len());
        for obj in objects {
            if objects_map.contains_key(&obj.name) {
                return Err(WorldError::DuplicateObject(obj.name));
            }
            object_order.push(obj.name.clone());
            objects_map.insert(obj.name.clone(), obj);
        }

        let world = World {
            name: name.into(),
            rooms: rooms_map,
            room_order,
            objects: objects_map,
            object_order,
            vocabulary,
        };

        let errors = validate_world(&world);
        if !errors.is_empty() {
            for e in &errors {
                warn!(problem = %e, "world validation failed");
            }
            return Err(WorldError::Invalid(errors));
        }

        for (word, definition) in world.vocabulary.chained() {
            warn!(
                word,
                definition,
                "synonym resolves to another synonym; only one substitution is applied"
            );
        }

        debug!(
            rooms = world.room_order.len(),
            objects = world.object_order.len(),
            synonyms = world.vocabulary.len(),
            "world built"
        );

        Ok(world)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Real name of the room aliased as START.
    pub fn start_room(&self) -> &str {
        &self.room_order[0]
    }

    /// Map a room reference (possibly the START alias) to the stored name.
    pub fn canonical_room_name(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.rooms.get_key_value(name) {
            return Some(key.as_str());
        }
        if name == START_ROOM {
            return Some(self.start_room());
        }
        None
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        let key = self.canonical_room_name(name)?;
        self.rooms.get(key)
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        let key = self.canonical_room_name(name)?.to_string();
        self.rooms.get_mut(&key)
    }

    /// Look up an object by name; the lookup is case-insensitive.
    pub fn object(&self, name: &str) -> Option<&AdvObject> {
        self.objects.get(&name.to_lowercase())
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.room_order.iter().filter_map(|n| self.rooms.get(n))
    }

    pub fn objects(&self) -> impl Iterator<Item = &AdvObject> {
        self.object_order.iter().filter_map(|n| self.objects.get(n))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Place every object at its declared starting location.
    ///
    /// Room contents are cleared first, so calling this again resets the
    /// world's objects instead of duplicating them.
    pub fn distribute(&mut self, inventory: &mut Inventory) {
        for room in self.rooms.values_mut() {
            room.contents.clear();
        }
        inventory.clear();

        for name in &self.object_order {
            let Some(obj) = self.objects.get(name) else {
                continue;
            };
            match &obj.location {
                ObjectLocation::Player => inventory.add(obj.name.clone()),
                ObjectLocation::Room(room_name) => {
                    let key = match self.canonical_room_name(room_name) {
                        Some(k) => k.to_string(),
                        None => continue,
                    };
                    if let Some(room) = self.rooms.get_mut(&key) {
                        room.add_object(obj.name.clone());
                    }
                }
            }
        }
    }
}
