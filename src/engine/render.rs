use crate::engine::inventory::Inventory;
use crate::engine::output::Output;
use crate::world;

pub const HELP_TEXT: &[&str] = &[
    "Welcome to Adventure!",
    "Who knows what wonders await you.  I will be your eyes",
    "and hands.  Direct me with natural English commands; I don't understand",
    "all of the English language, but I do a pretty good job.",
    "",
    "It's important to remember that passages often turn a lot, and that",
    "leaving a room to the north does not guarantee you can return to it to",
    "the south, although it often works out that way.  You'd best make",
    "yourself a map as you go along.",
    "",
    "Much of my vocabulary describes places and is used to move you there.",
    "To move, try words like IN, OUT, EAST, WEST, NORTH, SOUTH, UP, or DOWN.",
    "I also know about a number of objects hidden within the cave which you",
    "can TAKE or DROP.  To see what objects you're carrying, say INVENTORY.",
    "To reprint the detailed description of where you are, say LOOK.  If you",
    "want to end your adventure, say QUIT.",
];

pub fn render_long(out: &mut Output, room: &world::Room) {
    out.describe(room.long.clone());
}

/// Short description with a closing period; rooms without one get the long
/// description instead.
pub fn render_short(out: &mut Output, room: &world::Room) {
    match &room.short {
        Some(short) => out.describe(format!("{}.", short)),
        None => render_long(out, room),
    }
}

pub fn render_objects(out: &mut Output, room: &world::Room, world: &world::World) {
    for obj in room.contents().iter().filter_map(|name| world.object(name)) {
        out.describe(format!("There is {} here.", obj.description));
    }
}

pub fn render_inventory(out: &mut Output, inventory: &Inventory, world: &world::World) {
    if inventory.is_empty() {
        out.say("You are empty-handed.");
        return;
    }

    out.say("You are carrying:");
    for obj in inventory.iter().filter_map(|name| world.object(name)) {
        out.say(format!("  {}", obj.description));
    }
}

pub fn render_help(out: &mut Output) {
    out.say(HELP_TEXT.join("\n"));
}
