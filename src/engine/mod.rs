mod command;
mod error;
mod inventory;
mod navigation;
mod output;
mod port;
mod render;
mod session;

pub use command::Command;
pub use error::EngineError;
pub use inventory::Inventory;
pub use navigation::{forced_destination, next_room};
pub use output::{Output, OutputBlock};
pub use port::{ConsolePort, IoPort};
pub use render::{
    HELP_TEXT, render_help, render_inventory, render_long, render_objects, render_short,
};
pub use session::{FAREWELL, Session, SessionState};
