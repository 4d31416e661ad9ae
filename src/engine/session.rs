use tracing::debug;

use crate::engine::command::Command;
use crate::engine::error::EngineError;
use crate::engine::inventory::Inventory;
use crate::engine::navigation::{forced_destination, next_room};
use crate::engine::output::Output;
use crate::engine::port::IoPort;
use crate::engine::render::{
    render_help, render_inventory, render_long, render_objects, render_short,
};
use crate::world::{Destination, Room, World};

pub const FAREWELL: &str = "Thanks for playing.  Have a great day!!!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    EnteringRoom,
    AwaitingCommand,
    Terminated,
}

/// One player's game: the world, what they carry, and where they are.
pub struct Session {
    world: World,
    inventory: Inventory,
    current_room: String,
    previous_room: Option<String>,
    state: SessionState,
}

impl Session {
    /// Distributes the world's objects and places the player in START.
    pub fn new(mut world: World) -> Self {
        let mut inventory = Inventory::new();
        world.distribute(&mut inventory);
        let current_room = world.start_room().to_string();

        Session {
            world,
            inventory,
            current_room,
            previous_room: None,
            state: SessionState::EnteringRoom,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Drive the whole game over `port` until the player quits, leaves
    /// through EXIT, or the input closes.
    pub fn run<P: IoPort>(&mut self, port: &mut P, prompt: &str) -> Result<(), EngineError> {
        loop {
            match self.state {
                SessionState::Terminated => return Ok(()),
                SessionState::EnteringRoom => {
                    let mut out = Output::new();
                    self.enter_room(&mut out)?;
                    port.flush_output(out)?;
                }
                SessionState::AwaitingCommand => {
                    let Some(line) = port.read_line(prompt)? else {
                        debug!("input closed");
                        self.state = SessionState::Terminated;
                        return Ok(());
                    };
                    let mut out = Output::new();
                    self.apply(&line, &mut out)?;
                    port.flush_output(out)?;
                }
            }
        }
    }

    /// Describe the starting location. Equivalent to the first half of a
    /// [`Session::run`] turn, for front ends that feed input themselves.
    pub fn start(&mut self) -> Result<Output, EngineError> {
        let mut out = Output::new();
        if self.state == SessionState::EnteringRoom {
            self.enter_room(&mut out)?;
        }
        Ok(out)
    }

    /// Apply one line of input and settle into the next room.
    pub fn step(&mut self, line: &str) -> Result<Output, EngineError> {
        let mut out = Output::new();
        match self.state {
            SessionState::Terminated => return Err(EngineError::Terminated),
            SessionState::EnteringRoom => {
                self.enter_room(&mut out)?;
                if self.is_terminated() {
                    return Ok(out);
                }
            }
            SessionState::AwaitingCommand => {}
        }

        self.apply(line, &mut out)?;
        if self.state == SessionState::EnteringRoom {
            self.enter_room(&mut out)?;
        }
        Ok(out)
    }

    fn apply(&mut self, line: &str, out: &mut Output) -> Result<(), EngineError> {
        let command = Command::parse(line, self.world.vocabulary());
        debug!(?command, room = %self.current_room, "dispatch");
        self.dispatch(command, out)
    }

    /// Follow forced passages, then describe the room if it is new since
    /// the last prompt.
    fn enter_room(&mut self, out: &mut Output) -> Result<(), EngineError> {
        loop {
            let room = self.room()?;
            let Some(destination) = forced_destination(&self.world, room, &self.inventory)? else {
                break;
            };
            render_long(out, room);
            debug!(from = %self.current_room, to = %destination, "forced passage");
            match destination {
                Destination::Exit => {
                    self.state = SessionState::Terminated;
                    return Ok(());
                }
                Destination::Room(name) => self.move_to(&name)?,
            }
        }

        if self.previous_room.as_deref() != Some(self.current_room.as_str()) {
            let room = self.room_mut()?;
            if room.has_been_visited() {
                render_short(out, room);
            } else {
                render_long(out, room);
                room.set_visited(true);
            }
            let room = self.room()?;
            render_objects(out, room, &self.world);
            self.previous_room = Some(self.current_room.clone());
        }

        self.state = SessionState::AwaitingCommand;
        Ok(())
    }

    fn dispatch(&mut self, command: Command, out: &mut Output) -> Result<(), EngineError> {
        match command {
            Command::Empty => return Ok(()),
            Command::Quit => {
                out.say(FAREWELL);
                self.state = SessionState::Terminated;
                return Ok(());
            }
            Command::Help => render_help(out),
            Command::Look => {
                let room = self.room()?;
                render_long(out, room);
                render_objects(out, room, &self.world);
            }
            Command::Take(object) => self.take(object.as_deref(), out)?,
            Command::Drop(object) => self.drop_object(object.as_deref(), out)?,
            Command::Inventory => render_inventory(out, &self.inventory, &self.world),
            Command::Motion(word) => {
                let room = self.room()?;
                match next_room(&self.world, room, &word, &self.inventory)? {
                    None => out.say("I don't know how to apply that word here."),
                    Some(Destination::Exit) => {
                        debug!(room = %self.current_room, "left through exit");
                        self.state = SessionState::Terminated;
                        return Ok(());
                    }
                    Some(Destination::Room(name)) => self.move_to(&name)?,
                }
            }
        }

        self.state = SessionState::EnteringRoom;
        Ok(())
    }

    fn take(&mut self, object: Option<&str>, out: &mut Output) -> Result<(), EngineError> {
        let Some(name) = object else {
            out.say("Take what?");
            return Ok(());
        };
        let Some(obj) = self.world.object(name) else {
            out.say("I don't recognize that object name.");
            return Ok(());
        };
        let name = obj.name.clone();

        if !self.room_mut()?.remove_object(&name) {
            out.say("I don't see that here.");
            return Ok(());
        }
        self.inventory.add(name);
        out.say("Taken.");
        Ok(())
    }

    fn drop_object(&mut self, object: Option<&str>, out: &mut Output) -> Result<(), EngineError> {
        let Some(name) = object else {
            out.say("Drop what?");
            return Ok(());
        };
        let Some(obj) = self.world.object(name) else {
            out.say("I don't recognize that object name.");
            return Ok(());
        };
        let name = obj.name.clone();

        if !self.inventory.remove(&name) {
            out.say("You're not carrying that.");
            return Ok(());
        }
        self.room_mut()?.add_object(name);
        out.say("Dropped.");
        Ok(())
    }

    fn move_to(&mut self, name: &str) -> Result<(), EngineError> {
        let canonical = self
            .world
            .canonical_room_name(name)
            .ok_or_else(|| EngineError::IllegalPassage {
                from: self.current_room.clone(),
                to: name.to_string(),
            })?
            .to_string();
        self.current_room = canonical;
        Ok(())
    }

    fn room(&self) -> Result<&Room, EngineError> {
        self.world
            .room(&self.current_room)
            .ok_or_else(|| EngineError::MissingRoom(self.current_room.clone()))
    }

    fn room_mut(&mut self) -> Result<&mut Room, EngineError> {
        self.world
            .room_mut(&self.current_room)
            .ok_or_else(|| EngineError::MissingRoom(self.current_room.clone()))
    }
}
