//! User directory: append-only list of registered users

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};

use crate::{error::AppResult, models::User};

/// Column layout of the user file
const HEADER: [&str; 2] = ["name", "identifier"];

#[derive(Debug, Clone)]
pub struct UserDirectory {
    path: PathBuf,
}

impl UserDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one user row, writing the header row first when the file is
    /// absent or empty
    ///
    /// No uniqueness check: the directory is append-only and duplicates are
    /// permitted.
    pub fn append(&self, user: &User) -> AppResult<()> {
        // A zero-byte file needs the header too, or the next read would
        // consume the appended row as the header.
        let write_header = fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if write_header {
            writer.write_record(&HEADER)?;
        }
        writer.serialize(user)?;
        writer.flush()?;
        Ok(())
    }

    /// Whether a row matching both name and identifier exactly exists
    ///
    /// A missing directory reads as empty. Rows with fewer than two fields
    /// are skipped.
    pub fn exists_user(&self, name: &str, identifier: &str) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        for record in reader.records() {
            let record = record?;
            if record.len() < 2 {
                continue;
            }
            if &record[0] == name && &record[1] == identifier {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
