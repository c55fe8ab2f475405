//! Book record model

use serde::{Deserialize, Serialize};

/// A catalog row: one title with its available quantity
///
/// Identity is the (title, author) pair by exact string equality; duplicate
/// titles are distinct inventory entries addressed by list position only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Free-form text, never parsed as a date
    #[serde(rename = "publicationDate")]
    pub publication_date: String,
    pub quantity: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_date: publication_date.into(),
            quantity,
        }
    }

    /// Case-insensitive substring match against title or author
    ///
    /// An empty filter matches every record.
    pub fn matches(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        filter.is_empty()
            || self.title.to_lowercase().contains(&filter)
            || self.author.to_lowercase().contains(&filter)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} | Quantity: {}",
            self.title, self.author, self.publication_date, self.quantity
        )
    }
}
