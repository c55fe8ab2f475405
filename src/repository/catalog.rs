//! Catalog store: the persisted table of books and available quantities

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};

use crate::{error::AppResult, models::Book};

/// Column layout of the catalog file
const HEADER: [&str; 4] = ["title", "author", "publicationDate", "quantity"];

#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether the backing file has been created yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load every well-formed row, in stored order
    ///
    /// A missing file reads as an empty catalog. Rows with fewer than four
    /// fields, or with a quantity that is not a non-negative integer, are
    /// dropped without surfacing an error.
    pub fn load(&self) -> AppResult<Vec<Book>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let mut books = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() < 4 {
                continue;
            }
            let quantity = match record[3].trim().parse::<u32>() {
                Ok(quantity) => quantity,
                Err(_) => continue,
            };
            books.push(Book::new(&record[0], &record[1], &record[2], quantity));
        }

        tracing::debug!(count = books.len(), path = %self.path.display(), "loaded catalog");
        Ok(books)
    }

    /// Append one row, writing the header row first when the file is
    /// absent or empty
    pub fn append(&self, book: &Book) -> AppResult<()> {
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
        writer.serialize(book)?;
        writer.flush()?;
        Ok(())
    }

    /// Rewrite the whole file: header plus every row in order
    pub fn save(&self, books: &[Book]) -> AppResult<()> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&self.path)?;
        writer.write_record(&HEADER)?;
        for book in books {
            writer.serialize(book)?;
        }
        writer.flush()?;

        tracing::debug!(count = books.len(), path = %self.path.display(), "rewrote catalog");
        Ok(())
    }

    /// Case-insensitive substring search over title and author
    ///
    /// An empty filter returns the full catalog. Read-only.
    pub fn search(&self, filter: &str) -> AppResult<Vec<Book>> {
        let books = self.load()?;
        Ok(books.into_iter().filter(|b| b.matches(filter)).collect())
    }
}
