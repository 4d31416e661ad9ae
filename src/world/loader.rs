use serde::Deserialize;
use std::fs;
use std::path::Path;

use tracing::info;

use super::error::WorldError;
use super::model::{AdvObject, Destination, ObjectLocation, Passage, Room, World};
use super::vocabulary::Vocabulary;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    #[serde(default)]
    world: Option<WorldHeader>,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    object: Vec<ObjectConfig>, // [[object]] blocks
    #[serde(default)]
    synonym: Vec<SynonymConfig>, // [[synonym]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,

    // absent and "" are different: only absent falls back to the long text
    #[serde(default)]
    short: Option<String>,

    long: String,

    #[serde(default)]
    passage: Vec<PassageConfig>, // [[room.passage]]
}

#[derive(Deserialize)]
struct PassageConfig {
    dir: String,
    room: String,

    #[serde(default)]
    key: Option<String>,
}

#[derive(Deserialize)]
struct ObjectConfig {
    name: String,
    description: String,

    /// Room name, or PLAYER for the starting inventory.
    location: String,
}

#[derive(Deserialize)]
struct SynonymConfig {
    word: String,
    definition: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    let world = load_world_from_str(&contents)?;
    info!(path = %path.display(), name = world.name(), "world loaded");
    Ok(world)
}

/// Public API: load a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let rooms = world_file
        .room
        .into_iter()
        .map(|rc| {
            let passages = rc
                .passage
                .into_iter()
                .map(|p| Passage::new(&p.dir, Destination::parse(p.room.trim()), p.key.as_deref()))
                .collect();
            Room::new(
                rc.name.trim(),
                rc.short.map(|s| s.trim().to_string()),
                normalize_long_desc(&rc.long),
                passages,
            )
        })
        .collect();

    let objects = world_file
        .object
        .into_iter()
        .map(|oc| {
            AdvObject::new(
                &oc.name,
                oc.description.trim(),
                ObjectLocation::parse(&oc.location),
            )
        })
        .collect();

    let vocabulary: Vocabulary = world_file
        .synonym
        .iter()
        .map(|s| (s.word.as_str(), s.definition.as_str()))
        .collect();

    let name = world_file
        .world
        .map(|h| h.name.trim().to_string())
        .unwrap_or_default();

    World::new(name, rooms, objects, vocabulary)
}

/// Strip the indentation a TOML multi-line string picks up from the file
/// layout, plus any leading and trailing blank lines. Line breaks inside the
/// text are kept as written.
fn normalize_long_desc(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();

    let indent = lines
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last]
            .iter()
            .map(|l| l.get(indent..).unwrap_or_else(|| l.trim_start()))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}
