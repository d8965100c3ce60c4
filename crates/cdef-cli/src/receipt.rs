//! # Receipts
//!
//! A JSON record of each successful mutating command, written to
//! `<dir>/<command>-<YYYYmmddTHHMMSS.mmm>.json`. A name that is already taken
//! gets a `-1`, `-2`, ... suffix, so receipts are never overwritten.
//!
//! Receipts are an operator audit aid; the registry state file remains the
//! source of truth. They are written after the state change is committed,
//! and a receipt that cannot be written is logged rather than reported as a
//! command failure.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A command receipt.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt<T: Serialize> {
    /// The subcommand that produced the receipt.
    pub command: String,
    /// When the command completed.
    pub timestamp: DateTime<Utc>,
    /// Command-specific details.
    pub data: T,
}

impl<T: Serialize> Receipt<T> {
    /// Create a receipt stamped with the current time.
    pub fn new(command: &str, data: T) -> Self {
        Self {
            command: command.to_string(),
            timestamp: Utc::now(),
            data,
        }
    }

    /// Preferred file name for this receipt.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_stem())
    }

    fn file_stem(&self) -> String {
        format!(
            "{}-{}",
            self.command,
            self.timestamp.format("%Y%m%dT%H%M%S%.3f")
        )
    }

    /// Write the receipt into `dir`, creating it if needed. Never replaces an
    /// existing file.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create receipts directory {}", dir.display()))?;
        let json = serde_json::to_string_pretty(self).context("failed to serialize receipt")?;

        let stem = self.file_stem();
        let mut attempt = 0u32;
        loop {
            let path = match attempt {
                0 => dir.join(format!("{stem}.json")),
                n => dir.join(format!("{stem}-{n}.json")),
            };
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(json.as_bytes())
                        .with_context(|| format!("failed to write receipt to {}", path.display()))?;
                    tracing::info!(path = %path.display(), "receipt written");
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("failed to create receipt {}", path.display()))
                }
            }
        }
    }
}

/// Write a receipt if a receipts directory is configured. Failures are
/// logged as warnings and yield `None`.
pub fn emit<T: Serialize>(dir: Option<&Path>, command: &str, data: T) -> Option<PathBuf> {
    let dir = dir?;
    match Receipt::new(command, data).write_to_dir(dir) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!(
                command,
                error = %format!("{e:#}"),
                "receipt not written; the state change is already committed"
            );
            None
        }
    }
}
