//! Line-based keyboard commands read on a dedicated thread.

use crate::app::control::GameControl;
use std::io::BufRead;
use std::thread::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Exit,
    TogglePause,
}

impl InputCommand {
    /// `e` exits and `p` toggles pause. Case and surrounding whitespace are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            s if s.eq_ignore_ascii_case("e") => Some(Self::Exit),
            s if s.eq_ignore_ascii_case("p") => Some(Self::TogglePause),
            _ => None,
        }
    }

    pub fn apply(self, control: &GameControl) {
        match self {
            Self::Exit => control.request_exit(),
            Self::TogglePause => {
                control.toggle_pause();
            }
        }
    }
}

/// Reads commands from `reader` until `e`, end of input or a read error.
pub fn read_commands<R: BufRead>(reader: R, control: &GameControl) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Input stream failed");
                return;
            }
        };
        match InputCommand::parse(&line) {
            Some(command) => {
                command.apply(control);
                if command == InputCommand::Exit {
                    return;
                }
            }
            None if line.trim().is_empty() => {}
            None => tracing::debug!(input = %line.trim(), "Ignoring unknown command"),
        }
    }
}

/// Runs [`read_commands`] on its own OS thread.
///
/// Blocking reads never stall the async runtime; the thread is left to finish
/// on its own when the game ends first.
pub fn spawn_input_thread<R>(reader: R, control: GameControl) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    std::thread::spawn(move || read_commands(reader, &control))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse() {
        assert_eq!(InputCommand::parse("e"), Some(InputCommand::Exit));
        assert_eq!(InputCommand::parse("  P \n"), Some(InputCommand::TogglePause));
        assert_eq!(InputCommand::parse("E"), Some(InputCommand::Exit));
        assert_eq!(InputCommand::parse("exit"), None);
        assert_eq!(InputCommand::parse(""), None);
    }

    #[test]
    fn test_read_commands_stops_at_exit() {
        let control = GameControl::new();
        read_commands(Cursor::new("p\nhello\ne\np\n"), &control);
        assert!(control.exit_requested());
        // The trailing `p` after `e` is never read.
        assert!(control.is_paused());
    }

    #[test]
    fn test_input_thread_ends_at_eof() {
        let control = GameControl::new();
        let handle = spawn_input_thread(Cursor::new("p\np\n"), control.clone());
        handle.join().unwrap();
        assert!(!control.is_paused());
        assert!(!control.exit_requested());
    }
}
