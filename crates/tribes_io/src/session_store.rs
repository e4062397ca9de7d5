//! Saved sessions on disk.
//!
//! Every session is one pretty-printed JSON file named `<uuid>.json` inside
//! the store directory. Records carry a format version; files written by a
//! newer version are refused instead of being half-read.

use crate::error::{IoError, Result};
use crate::serialization::{from_json, write_json_file};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tribes_core::BoardSnapshot;
use uuid::Uuid;

pub const CURRENT_SESSION_VERSION: u32 = 1;

/// A saved session: identity, save time and the board it was running.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub version: u32,
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub board: BoardSnapshot,
}

impl SessionRecord {
    /// Stamps `board` with the current format version and time.
    pub fn new(id: Uuid, board: BoardSnapshot) -> Self {
        Self {
            version: CURRENT_SESSION_VERSION,
            id,
            saved_at: Utc::now(),
            board,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            saved_at: self.saved_at,
            generation: self.board.generation,
            rows: self.board.config.rows,
            cols: self.board.config.cols,
        }
    }
}

/// Writes `record` as pretty JSON to an arbitrary `path`.
pub fn write_record(record: &SessionRecord, path: impl AsRef<Path>) -> Result<()> {
    write_json_file(record, path)
}

/// Reads a record written by [`write_record`] or [`SessionStore::save`],
/// refusing newer format versions.
pub fn read_record(path: impl AsRef<Path>) -> Result<SessionRecord> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading session from {:?}", path))
    })?;
    parse_record(&json)
}

/// What `SessionStore::list` reports per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Directory-backed collection of [`SessionRecord`]s.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Writes `record`, replacing any earlier save of the same session.
    pub fn save(&self, record: &SessionRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("creating {:?}", self.dir))
        })?;
        let path = self.path_for(record.id);
        write_record(record, &path)?;
        tracing::info!(id = %record.id, generation = record.board.generation, path = ?path, "Session saved");
        Ok(path)
    }

    pub fn load(&self, id: Uuid) -> Result<SessionRecord> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(IoError::not_found(format!("session {id}")));
        }
        let record = read_record(&path)?;
        if record.id != id {
            return Err(IoError::validation(format!(
                "file for session {id} holds session {}",
                record.id
            )));
        }
        Ok(record)
    }

    /// Summaries of every readable session, oldest save first.
    ///
    /// A missing directory is an empty store. Only `<uuid>.json` files are
    /// considered; those that fail to parse are skipped with a warning.
    pub fn list(&self) -> Result<Vec<SessionSummary>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let named_by_id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| Uuid::parse_str(stem).is_ok());
            if !named_by_id {
                continue;
            }
            let parsed = fs::read_to_string(&path)
                .map_err(IoError::from)
                .and_then(|json| parse_record(&json));
            match parsed {
                Ok(record) => summaries.push(record.summary()),
                Err(e) => tracing::warn!(path = ?path, error = %e, "Skipping unreadable session"),
            }
        }
        summaries.sort_by_key(|s| s.saved_at);
        Ok(summaries)
    }

    pub fn remove(&self, id: Uuid) -> Result<()> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(id = %id, "Session removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(IoError::not_found(format!("session {id}")))
            }
            Err(e) => Err(IoError::FileSystem(e).with_context(format!("removing session {id}"))),
        }
    }
}

fn parse_record(json: &str) -> Result<SessionRecord> {
    let probe: VersionProbe = from_json(json)?;
    match probe.version {
        CURRENT_SESSION_VERSION => from_json(json),
        v if v > CURRENT_SESSION_VERSION => Err(IoError::validation(format!(
            "session version {} is newer than supported version {}",
            v, CURRENT_SESSION_VERSION
        ))),
        v => Err(IoError::validation(format!("unsupported session version: {v}"))),
    }
}
