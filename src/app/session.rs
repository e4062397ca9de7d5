//! A game with an identity that can be saved and reopened.

use crate::app::control::GameControl;
use crate::app::game::Game;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tribes_core::{Board, BoardConfig};
use std::path::Path;
use tribes_io::{write_record, SessionRecord, SessionStore};
use uuid::Uuid;

pub struct Session {
    id: Uuid,
    game: Game,
}

impl Session {
    /// Starts a fresh session on a newly seeded board.
    pub fn new(config: BoardConfig, control: GameControl) -> Result<Self> {
        let board = Board::create(config).context("Failed to create board")?;
        let id = Uuid::new_v4();
        tracing::info!(id = %id, "Session created");
        Ok(Self {
            id,
            game: Game::new(board, control),
        })
    }

    /// Reopens a saved session where it left off.
    pub fn open(store: &SessionStore, id: Uuid, control: GameControl) -> Result<Self> {
        let record = store
            .load(id)
            .with_context(|| format!("Session not found! Provided session id: {id}"))?;
        let board = Board::restore(record.board).context("Failed to restore board")?;
        tracing::info!(id = %id, generation = board.generation(), "Session opened");
        Ok(Self {
            id,
            game: Game::new(board, control),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Writes the current board to `store`, waiting for any pending generation.
    pub async fn save(&mut self, store: &SessionStore) -> Result<PathBuf> {
        let record = self.record().await?;
        let path = store
            .save(&record)
            .with_context(|| format!("Failed to save session {}", self.id))?;
        Ok(path)
    }

    /// Writes the current board to an arbitrary file outside the store.
    pub async fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let record = self.record().await?;
        write_record(&record, path)
            .with_context(|| format!("Failed to save session {} to {}", self.id, path.display()))?;
        tracing::info!(id = %self.id, path = ?path, "Session exported");
        Ok(())
    }

    async fn record(&mut self) -> Result<SessionRecord> {
        let snapshot = self.game.board_mut().snapshot().await?;
        Ok(SessionRecord::new(self.id, snapshot))
    }

    /// Deletes a saved session from `store`.
    pub fn close(store: &SessionStore, id: Uuid) -> Result<()> {
        store
            .remove(id)
            .with_context(|| format!("Session: {id} does not exist!"))
    }
}
