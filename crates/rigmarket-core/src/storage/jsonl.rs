// Rust guideline compliant 2026-10-12

//! JSONL-backed listing store.
//!
//! One listing per line. Every write rewrites the file through a temp file and
//! an atomic rename while holding an exclusive lock, so readers in other
//! processes see either the old file or the new one.

use super::{deactivate_in_place, ListingStore, UpdateOutcome};
use crate::query::{ListingQuery, Page};
use crate::{Error, Listing, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Contents of the JSONL file as last read.
#[derive(Debug, Default)]
struct FileRows {
    listings: Vec<Listing>,
    /// Lines that did not parse as a listing, in file order.
    unreadable: Vec<String>,
}

/// Listing store persisted to a JSONL file.
#[derive(Debug)]
pub struct JsonlStore {
    /// Path to the JSONL file.
    path: PathBuf,
    /// Serializes writers within this process; the file lock covers the rest.
    guard: Mutex<()>,
}

impl JsonlStore {
    /// Creates a new store over `path`.
    ///
    /// The file is created lazily on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self {
            path,
            guard: Mutex::new(()),
        })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the file.
    ///
    /// Each line parses on its own, so a malformed line is skipped with a
    /// warning without affecting the lines around it. Unparseable lines are
    /// kept verbatim and written back by [`JsonlStore::write_file`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a well-formed row fails
    /// validation.
    fn read_file(&self) -> Result<FileRows> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let mut rows = FileRows::default();
        if !self.path.exists() {
            return Ok(rows);
        }

        let reader = BufReader::new(File::open(&self.path)?);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Listing>(&line) {
                Ok(listing) => {
                    listing.validate()?;
                    rows.listings.push(listing);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "Skipping malformed listing line"
                    );
                    rows.unreadable.push(line);
                }
            }
        }

        Ok(rows)
    }

    /// Replaces the file contents atomically (temp file + rename).
    ///
    /// Unreadable lines from the last read are appended unchanged.
    fn write_file(&self, rows: &FileRows) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            for listing in &rows.listings {
                serde_json::to_writer(&mut writer, listing)?;
                writer.write_all(b"\n")?;
            }
            for line in &rows.unreadable {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Runs `f` while holding both the process mutex and an exclusive file
    /// lock.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if either lock cannot be acquired, or the
    /// closure's error.
    fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let _guard = self
            .guard
            .lock()
            .map_err(|_| Error::StoreUnavailable("store mutex poisoned".to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.lock_exclusive().map_err(|e| {
            Error::StoreUnavailable(format!("failed to lock {}: {}", lock_path.display(), e))
        })?;

        let result = f();

        if let Err(e) = lock_file.unlock() {
            tracing::warn!(path = %lock_path.display(), error = %e, "Failed to release store lock");
        }
        result
    }

    fn modify<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Listing>) -> Result<(T, bool)>,
    {
        self.with_lock(|| {
            let mut rows = self.read_file()?;
            let (value, dirty) = f(&mut rows.listings)?;
            if dirty {
                self.write_file(&rows)?;
            }
            Ok(value)
        })
    }
}

impl ListingStore for JsonlStore {
    fn insert(&self, listing: Listing) -> Result<()> {
        listing.validate()?;
        self.modify(|listings| {
            if listings.iter().any(|l| l.id == listing.id) {
                return Err(Error::Conflict(format!(
                    "Listing {} already exists",
                    listing.id
                )));
            }
            listings.push(listing);
            Ok(((), true))
        })
    }

    fn get(&self, id: &str) -> Result<Option<Listing>> {
        Ok(self.load_all()?.into_iter().find(|l| l.id == id))
    }

    fn load_all(&self) -> Result<Vec<Listing>> {
        self.with_lock(|| Ok(self.read_file()?.listings))
    }

    fn update_if(
        &self,
        id: &str,
        condition: &dyn Fn(&Listing) -> bool,
        change: &mut dyn FnMut(&mut Listing),
    ) -> Result<UpdateOutcome> {
        self.modify(|listings| {
            let Some(current) = listings.iter_mut().find(|l| l.id == id) else {
                return Ok((UpdateOutcome::Missing, false));
            };

            if !condition(current) {
                return Ok((UpdateOutcome::Rejected(current.clone()), false));
            }

            let mut next = current.clone();
            change(&mut next);
            next.validate()?;
            *current = next.clone();
            Ok((UpdateOutcome::Updated(next), true))
        })
    }

    fn increment_views(&self, id: &str) -> Result<Option<u64>> {
        self.modify(|listings| {
            let views = listings.iter_mut().find(|l| l.id == id).map(|listing| {
                listing.views = listing.views.saturating_add(1);
                listing.views
            });
            let dirty = views.is_some();
            Ok((views, dirty))
        })
    }

    fn deactivate_expired(&self, now: i64) -> Result<Vec<String>> {
        self.modify(|listings| {
            let ids = deactivate_in_place(listings.iter_mut(), now);
            let dirty = !ids.is_empty();
            Ok((ids, dirty))
        })
    }

    fn purge_due(&self, now: i64) -> Result<Vec<String>> {
        self.modify(|listings| {
            let (due, kept): (Vec<Listing>, Vec<Listing>) = listings
                .drain(..)
                .partition(|listing| listing.is_purge_due(now));
            *listings = kept;
            let ids: Vec<String> = due.into_iter().map(|l| l.id).collect();
            let dirty = !ids.is_empty();
            Ok((ids, dirty))
        })
    }

    fn select(&self, query: &ListingQuery) -> Result<Page<Listing>> {
        Ok(query.execute(self.load_all()?))
    }
}
