//! The core `EntryStore` struct and its associated types, providing the primary API for interaction.

use crate::config::Config;
use crate::dates::EntryDate;
use crate::entry::Entry;
use crate::parse::parse_entry_text;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A hard failure from a single-entry operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry for {date}")]
    NotFound { date: EntryDate },
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

/// Represents a non-critical issue that occurred during a directory scan.
///
/// This is used to report problems (e.g., stray files, unreadable entries)
/// without stopping a larger query operation.
#[derive(Debug)]
pub enum QueryError {
    InvalidName { path: PathBuf, error: String },
    FileError { path: PathBuf, error: anyhow::Error },
}

/// The complete result of a listing query, containing successfully parsed
/// entries and any warnings.
#[derive(Debug)]
pub struct QueryResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<QueryError>,
}

/// Valid entry dates found by a directory scan, plus per-file problems.
#[derive(Debug)]
pub struct ScanResult {
    /// Newest first.
    pub dates: Vec<EntryDate>,
    pub errors: Vec<QueryError>,
}

/// The central struct for all entry-file operations.
///
/// An instance of `EntryStore` holds the configuration and provides methods
/// for reading from and writing to the entries directory. Nothing is cached;
/// every call re-reads storage.
#[derive(Debug)]
pub struct EntryStore {
    pub config: Config,
}

impl EntryStore {
    /// Creates a new `EntryStore`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `EntryStore` with a specific `Config`.
    ///
    /// This also ensures that the entries directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.entries_dir)
            .with_context(|| format!("creating {}", config.entries_dir.display()))?;
        Ok(Self { config })
    }

    /// Path of the file backing `date`.
    pub fn entry_path(&self, date: EntryDate) -> PathBuf {
        self.config.entries_dir.join(date.file_name())
    }

    pub fn has_entry(&self, date: EntryDate) -> bool {
        self.entry_path(date).exists()
    }

    /// Lists the dates of all stored entries, newest first.
    ///
    /// For well-formed names this order matches descending lexicographic
    /// filename order. Stray files are skipped silently here; use
    /// [`scan`](Self::scan) when the skips matter.
    pub fn list_dates(&self) -> Result<Vec<EntryDate>> {
        Ok(self.scan()?.dates)
    }

    /// Scans the entries directory, separating valid entry files from stray
    /// ones.
    ///
    /// Only `<YYYYMMDD>.txt` names with a real calendar date count as
    /// entries; everything else is reported as a [`QueryError::InvalidName`]
    /// rather than silently mis-read.
    pub fn scan(&self) -> Result<ScanResult> {
        let dir = &self.config.entries_dir;
        let mut dates = Vec::new();
        let mut errors = Vec::new();

        for dir_entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
            let path = dir_entry
                .with_context(|| format!("reading {}", dir.display()))?
                .path();
            if !path.is_file() {
                continue;
            }
            match date_from_path(&path) {
                Ok(date) => dates.push(date),
                Err(error) => errors.push(QueryError::InvalidName { path, error }),
            }
        }

        dates.sort_unstable();
        dates.reverse();
        Ok(ScanResult { dates, errors })
    }

    /// Raw text of the entry for `date`.
    pub fn read_raw(&self, date: EntryDate) -> Result<String, StoreError> {
        let path = self.entry_path(date);
        if !path.exists() {
            return Err(StoreError::NotFound { date });
        }
        let raw =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        Ok(raw)
    }

    /// Reads and parses the entry for `date`.
    ///
    /// With `truncate`, the content is cut for list views; see
    /// [`parse_entry_text`].
    pub fn read_entry(&self, date: EntryDate, truncate: bool) -> Result<Entry, StoreError> {
        let raw = self.read_raw(date)?;
        Ok(parse_entry_text(&raw, date, truncate))
    }

    /// Reads every stored entry with truncated content, newest first.
    ///
    /// This is the primary query behind the listing pages. It is designed to
    /// be resilient: stray files and per-file read failures are collected as
    /// [`QueryError`]s instead of aborting the whole listing.
    pub fn read_summaries(&self) -> Result<QueryResult> {
        let scan = self.scan()?;
        let mut entries = Vec::new();
        let mut errors = scan.errors;

        for date in scan.dates {
            match self.read_entry(date, true) {
                Ok(entry) => entries.push(entry),
                Err(error) => errors.push(QueryError::FileError {
                    path: self.entry_path(date),
                    error: error.into(),
                }),
            }
        }

        Ok(QueryResult { entries, errors })
    }

    /// Persists `title` and `content` under `<date>.txt`.
    ///
    /// An existing entry for that date is overwritten silently; last write
    /// wins, with no detection of racing writers.
    pub fn write_entry(&self, date: EntryDate, title: &str, content: &str) -> Result<PathBuf> {
        let path = self.entry_path(date);
        fs::write(&path, format!("{title}\n{content}"))
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Removes the entry for `date`.
    pub fn delete_entry(&self, date: EntryDate) -> Result<(), StoreError> {
        let path = self.entry_path(date);
        if !path.exists() {
            return Err(StoreError::NotFound { date });
        }
        fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
        Ok(())
    }
}

fn date_from_path(path: &Path) -> Result<EntryDate, String> {
    let is_txt = path
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if !is_txt {
        return Err("not a .txt file".to_string());
    }
    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| "non-UTF-8 file name".to_string())?;
    EntryDate::parse(stem).map_err(|e| e.to_string())
}
