//! Append-only lock event log.
//!
//! The terminal is in raw alternate-screen mode during play, so nothing can be
//! printed. Instead each merge can be written as one `key=value` line to a
//! file, flushed immediately so the log survives a crash.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::GameSession;
use crate::types::LockEvent;

pub struct EventLog<W: Write> {
    out: W,
    lines: u64,
}

/// Event log backed by a buffered file
pub type FileEventLog = EventLog<BufWriter<File>>;

impl FileEventLog {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Write one event line for game `game_id` and flush.
    pub fn record(&mut self, game_id: u32, event: &LockEvent) -> Result<()> {
        writeln!(self.out, "{}", format_event(game_id, event)).context("write event log")?;
        self.out.flush().context("flush event log")?;
        self.lines += 1;
        Ok(())
    }

    /// Record the session's pending lock event, if any.
    ///
    /// A session keeps only the latest event, so this runs after every
    /// `dispatch` and every `update`.
    pub fn record_pending(&mut self, session: &mut GameSession) -> Result<bool> {
        match session.take_last_event() {
            Some(event) => {
                self.record(session.state().game_id(), &event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// One log line, without the trailing newline.
pub fn format_event(game_id: u32, event: &LockEvent) -> String {
    format!(
        "game={} piece={} rows={} points={} score={} level={} total_rows={} level_up={} game_over={}",
        game_id,
        event.kind.as_str(),
        event.rows_cleared,
        event.points,
        event.score,
        event.level,
        event.total_rows,
        event.leveled_up,
        event.game_over,
    )
}
