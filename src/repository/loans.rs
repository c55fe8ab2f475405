//! Loan store: the persisted table of active borrow records

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};

use crate::{error::AppResult, models::Loan};

/// Column layout of the loan file
const HEADER: [&str; 4] = ["borrower", "title", "author", "loanTimestamp"];

#[derive(Debug, Clone)]
pub struct LoanStore {
    path: PathBuf,
}

impl LoanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether the backing file has been created yet
    ///
    /// Distinguishes "no loan was ever registered" from "the store exists
    /// but holds no active loan".
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load every active loan, in stored order
    ///
    /// Every row present is an active loan; returned loans are deleted.
    /// Rows with fewer than four fields are dropped.
    pub fn load(&self) -> AppResult<Vec<Loan>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let mut loans = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() < 4 {
                continue;
            }
            loans.push(Loan {
                borrower: record[0].to_string(),
                title: record[1].to_string(),
                author: record[2].to_string(),
                loaned_at: record[3].to_string(),
            });
        }

        tracing::debug!(count = loans.len(), path = %self.path.display(), "loaded loans");
        Ok(loans)
    }

    /// Append one loan row, writing the header row first when the file is
    /// absent or empty
    pub fn append(&self, loan: &Loan) -> AppResult<()> {
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
        writer.serialize(loan)?;
        writer.flush()?;
        Ok(())
    }

    /// Rewrite the whole file: header plus every row in order
    pub fn save(&self, loans: &[Loan]) -> AppResult<()> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&self.path)?;
        writer.write_record(&HEADER)?;
        for loan in loans {
            writer.serialize(loan)?;
        }
        writer.flush()?;

        tracing::debug!(count = loans.len(), path = %self.path.display(), "rewrote loans");
        Ok(())
    }
}
