//! The game loop: advance the board until it settles or the user quits.

use crate::app::control::GameControl;
use crate::ui::renderer::Renderer;
use anyhow::Result;
use std::fmt;
use std::time::Duration;
use tribes_core::Board;
use tribes_data::{SimulationState, Tribe};

const PAUSE_POLL: Duration = Duration::from_millis(50);

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The board repeated a configuration last seen `since` memo entries ago.
    Cycle { since: usize, hash: u32 },
    Victory(Tribe),
    Extinction,
    /// Exit was requested before the board settled.
    Interrupted { generation: u64 },
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { since, .. } => {
                write!(f, "The state is cyclic! The cycle repeats every {since} generations!")
            }
            Self::Victory(tribe) => write!(f, "The {} tribe was victorious!", tribe.name()),
            Self::Extinction => write!(f, "All tribes died out!"),
            Self::Interrupted { generation } => write!(f, "Stopped at generation {generation}."),
        }
    }
}

pub struct Game {
    board: Board,
    control: GameControl,
}

impl Game {
    pub fn new(board: Board, control: GameControl) -> Self {
        Self { board, control }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn control(&self) -> &GameControl {
        &self.control
    }

    /// Runs generations until a terminal state or an exit request, then
    /// announces the outcome through `renderer`.
    pub async fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<GameOutcome> {
        renderer.render(self.board.front(), self.board.generation())?;

        let outcome = loop {
            if self.control.exit_requested() {
                break GameOutcome::Interrupted {
                    generation: self.board.generation(),
                };
            }
            if self.control.is_paused() {
                tokio::time::sleep(PAUSE_POLL).await;
                continue;
            }

            let mut rendered = Ok(());
            let state = self
                .board
                .next_state(|grid, generation| rendered = renderer.render(grid, generation))
                .await?;
            rendered?;

            if let Some(outcome) = self.settle(state)? {
                break outcome;
            }
        };

        tracing::info!(generation = self.board.generation(), outcome = ?outcome, "Game over");
        renderer.announce(&outcome)?;
        Ok(outcome)
    }

    fn settle(&self, state: SimulationState) -> Result<Option<GameOutcome>> {
        let outcome = match state {
            SimulationState::Running => return Ok(None),
            SimulationState::Cycling => {
                let hash = self.board.tribe_hash_board().hash;
                GameOutcome::Cycle {
                    since: self.board.cycle_frequency(hash)?,
                    hash,
                }
            }
            SimulationState::TribeVictorious(tribe) => GameOutcome::Victory(tribe),
            SimulationState::EveryoneLost => GameOutcome::Extinction,
        };
        Ok(Some(outcome))
    }
}
