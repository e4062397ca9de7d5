pub mod renderer;

pub use renderer::{HeadlessRenderer, Renderer, TerminalRenderer};
