pub mod config_file;
pub mod control;
pub mod game;
pub mod input;
pub mod session;

pub use control::GameControl;
pub use game::{Game, GameOutcome};
pub use input::{spawn_input_thread, InputCommand};
pub use session::Session;
