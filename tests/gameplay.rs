use std::io::Cursor;

use adventure::engine::{ConsolePort, EngineError, FAREWELL, Session, SessionState};
use adventure::world::{World, load_world_from_str};
use proptest::prelude::*;

const CROWTHER: &str = include_str!("../worlds/crowther.toml");

fn cave() -> World {
    load_world_from_str(CROWTHER).expect("bundled world loads")
}

/// Play `input` through a console port and return everything printed.
fn transcript(world: World, input: &str) -> (Session, String) {
    let mut session = Session::new(world);
    let mut port = ConsolePort::new(Cursor::new(input.to_string()), Vec::new());
    session.run(&mut port, "> ").expect("session runs");
    let text = String::from_utf8(port.into_output()).expect("utf-8 output");
    (session, text)
}

/// Number of places (rooms plus inventory) holding `object`.
fn holders(session: &Session, object: &str) -> usize {
    let in_rooms = session
        .world()
        .rooms()
        .filter(|r| r.contains(object))
        .count();
    in_rooms + usize::from(session.inventory().contains(object))
}

#[test]
fn bundled_world_loads_with_start_and_inventory() {
    let session = Session::new(cave());
    assert_eq!(session.current_room(), "OutsideBuilding");
    assert_eq!(session.inventory().iter().collect::<Vec<_>>(), ["map"]);
    assert!(session.world().room("InsideBuilding").unwrap().contains("keys"));
}

#[test]
fn quit_prints_farewell_and_stops_reading() {
    let (session, text) = transcript(cave(), "quit\nlook\n");
    assert!(session.is_terminated());
    assert!(text.starts_with("You are standing at the end of a road"));
    assert!(text.ends_with(&format!("> {FAREWELL}\n")));
    // "look" after quit was never read
    assert_eq!(text.matches("> ").count(), 1);
}

#[test]
fn closed_input_ends_the_session_quietly() {
    let (session, text) = transcript(cave(), "");
    assert_eq!(session.state(), SessionState::Terminated);
    assert!(!text.contains(FAREWELL));
}

#[test]
fn collecting_keys_opens_the_grate_and_chute_chains_rooms() {
    let script = "in\ntake keys\nget lantern\ni\nout\ns\nd\nchute\nn\n";
    let (session, text) = transcript(cave(), script);

    assert!(text.contains("There is a set of keys here."));
    assert!(text.contains("Taken.\n> Taken."));
    assert!(text.contains(
        "You are carrying:\n  a crumpled hand-drawn map\n  a set of keys\n  a brightly shining brass lamp"
    ));
    // second visit outside uses the short description
    assert!(text.contains("> Outside building.\n"));
    assert!(text.contains("You are in a small chamber beneath a 3x3 steel grate"));

    let slide = text
        .find("You lose your footing")
        .expect("chute top described");
    let middle = text.find("...faster and faster").expect("chute middle described");
    let bottom = text.find("You tumble out into daylight").expect("exit described");
    assert!(slide < middle && middle < bottom);

    // leaving through EXIT says nothing more
    assert!(session.is_terminated());
    assert!(text.ends_with("> "));
    assert!(!text.contains(FAREWELL));
}

#[test]
fn garbled_input_line_is_reported_and_play_continues() {
    let mut session = Session::new(cave());
    let mut port = ConsolePort::new(Cursor::new(b"caf\xe9\nin\nquit\n".to_vec()), Vec::new());
    session.run(&mut port, "> ").expect("session survives a non-UTF-8 line");
    let text = String::from_utf8(port.into_output()).expect("utf-8 output");

    assert!(text.contains("> I don't know how to apply that word here.\n"));
    assert_eq!(session.current_room(), "InsideBuilding");
    assert!(session.is_terminated());
    assert!(text.ends_with(&format!("> {FAREWELL}\n")));
}

#[test]
fn locked_grate_falls_through_to_forced_bounce() {
    let mut session = Session::new(cave());
    session.start().unwrap();
    session.step("south").unwrap();
    assert_eq!(session.current_room(), "Valley");

    let out = session.step("down").unwrap();
    assert_eq!(
        out.to_text(),
        "The grate is locked and you don't have any keys."
    );
    assert_eq!(session.current_room(), "Valley");
}

#[test]
fn unknown_words_are_reported_in_game() {
    let mut session = Session::new(cave());
    session.start().unwrap();
    let out = session.step("plugh").unwrap();
    assert_eq!(out.to_text(), "I don't know how to apply that word here.");
    assert_eq!(session.current_room(), "OutsideBuilding");

    let out = session.step("take rod").unwrap();
    assert_eq!(out.to_text(), "I don't see that here.");
}

#[test]
fn magic_word_returns_to_the_building() {
    let mut session = Session::new(cave());
    session.start().unwrap();
    for cmd in ["in", "take keys", "out", "s", "d", "w", "w"] {
        session.step(cmd).unwrap();
    }
    assert_eq!(session.current_room(), "DebrisRoom");
    let out = session.step("XYZZY").unwrap();
    assert_eq!(out.to_text(), "Inside building.\nThere is a brightly shining brass lamp here.");
}

#[test]
fn step_after_termination_is_an_error() {
    let mut session = Session::new(cave());
    session.start().unwrap();
    session.step("q").unwrap();
    assert!(matches!(session.step("look"), Err(EngineError::Terminated)));
}

#[test]
fn take_then_drop_restores_membership() {
    let mut session = Session::new(cave());
    session.start().unwrap();
    session.step("in").unwrap();

    assert_eq!(session.step("take lamp").unwrap().to_text(), "Taken.");
    assert!(session.inventory().contains("lamp"));
    assert_eq!(session.step("drop lamp").unwrap().to_text(), "Dropped.");
    assert!(!session.inventory().contains("lamp"));
    assert!(session.world().room("InsideBuilding").unwrap().contains("lamp"));
}

const COMMANDS: &[&str] = &[
    "in", "out", "n", "s", "e", "w", "u", "d", "chute", "xyzzy", "look", "i", "help",
    "take keys", "take lamp", "take rod", "take map", "drop keys", "drop lamp", "drop rod",
    "drop map", "get lantern", "take", "frobozz",
];

const OBJECTS: &[&str] = &["keys", "lamp", "rod", "map"];

proptest! {
    #[test]
    fn every_object_is_in_exactly_one_place(
        script in prop::collection::vec(prop::sample::select(COMMANDS), 0..40)
    ) {
        let mut session = Session::new(cave());
        session.start().unwrap();
        let names: Vec<String> = session.world().objects().map(|o| o.name.clone()).collect();

        for cmd in script {
            if session.is_terminated() {
                break;
            }
            session.step(cmd).unwrap();
            for name in &names {
                prop_assert_eq!(holders(&session, name), 1, "object {} after {}", name, cmd);
            }
        }
    }

    #[test]
    fn take_drop_round_trip(
        prefix in prop::collection::vec(prop::sample::select(COMMANDS), 0..20),
        object in prop::sample::select(OBJECTS),
    ) {
        let mut session = Session::new(cave());
        session.start().unwrap();
        for cmd in prefix {
            if session.is_terminated() {
                return Ok(());
            }
            session.step(cmd).unwrap();
        }
        if session.is_terminated() {
            return Ok(());
        }

        let room = session.current_room().to_string();
        let was_here = session.world().room(&room).unwrap().contains(object);
        let out = session.step(&format!("take {object}")).unwrap();
        if was_here {
            prop_assert_eq!(out.to_text(), "Taken.");
            session.step(&format!("drop {object}")).unwrap();
            prop_assert!(session.world().room(&room).unwrap().contains(object));
            prop_assert!(!session.inventory().contains(object));
        }
    }
}
