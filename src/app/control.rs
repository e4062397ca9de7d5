//! Shared run/pause/exit flags between the game loop and the input thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle over the game's control flags.
///
/// Every clone observes the same flags.
#[derive(Clone, Debug, Default)]
pub struct GameControl {
    exit: Arc<AtomicBool>,
    paused: Arc<AtomicBool>,
}

impl GameControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the game loop to stop at the next generation boundary.
    pub fn request_exit(&self) {
        self.exit.store(true, Ordering::SeqCst);
        tracing::info!("Exit requested");
    }

    pub fn exit_requested(&self) -> bool {
        self.exit.load(Ordering::SeqCst)
    }

    /// Flips the pause flag and returns the new value.
    pub fn toggle_pause(&self) -> bool {
        let paused = !self.paused.fetch_xor(true, Ordering::SeqCst);
        tracing::info!(paused, "Pause toggled");
        paused
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flags() {
        let control = GameControl::new();
        let other = control.clone();
        assert!(!control.exit_requested());

        other.request_exit();
        assert!(control.exit_requested());
    }

    #[test]
    fn test_toggle_pause() {
        let control = GameControl::new();
        assert!(control.toggle_pause());
        assert!(control.is_paused());
        assert!(!control.toggle_pause());
        assert!(!control.is_paused());
    }
}
