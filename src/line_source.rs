//! File-backed dialogue sources for the spawner
//!
//! Each falling line of text comes from one of two plain-text files given on
//! the command line. A `LineSource` holds the filtered contents of one file
//! plus a cursor so playback continues where it left off, even across the
//! periodic re-reads that pick up edits to the file while the game runs.

use std::fs;
use std::path::{Path, PathBuf};

/// Marker for comment lines; a line starting with this is never spawned.
const COMMENT_MARKER: &str = "//";

/// An ordered sequence of spawnable lines read from a file.
///
/// Comment lines and blank lines are filtered out at load time, so consumers
/// only ever see real content. The cursor persists across [`reload`] calls:
/// re-reading the file does not restart playback from line 0.
///
/// [`reload`]: LineSource::reload
pub struct LineSource {
    path: PathBuf,
    lines: Vec<String>,
    cursor: usize,
}

impl LineSource {
    /// Opens a source for `path`, reading it immediately.
    ///
    /// An unreadable file is not an error: the source starts empty and may
    /// pick up content on a later reload.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lines = read_lines(&path);
        LineSource {
            path,
            lines,
            cursor: 0,
        }
    }

    /// Returns the line at the cursor and advances it, or `None` when the
    /// source is exhausted (cursor unchanged).
    pub fn next(&mut self) -> Option<String> {
        let line = self.lines.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(line)
    }

    /// Re-reads the file, replacing the line sequence wholesale.
    ///
    /// The cursor carries over so playback continues, but it is clamped to
    /// the new length if the file shrank below it. A shrunken file therefore
    /// reads as exhausted until further reloads grow it again.
    pub fn reload(&mut self) {
        self.lines = read_lines(&self.path);
        if self.cursor > self.lines.len() {
            self.cursor = self.lines.len();
        }
    }

    /// Number of spawnable lines currently loaded.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)] // Used by tests
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Builds a source directly from lines, bypassing the filesystem.
    #[cfg(test)]
    pub fn from_lines(lines: Vec<String>) -> Self {
        LineSource {
            path: PathBuf::new(),
            lines,
            cursor: 0,
        }
    }
}

/// Reads `path` and returns its spawnable lines: comment lines (first two
/// characters `//`) and blank lines are dropped, everything else is kept
/// verbatim. A `//` later in a line is content, not a comment.
///
/// Returns an empty sequence if the file cannot be read; the condition is
/// logged and recoverable, never fatal.
fn read_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
            .map(String::from)
            .collect(),
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
