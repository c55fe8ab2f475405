//! Loan record model

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format of the loan timestamp column: "DD/MM/YYYY HH:MM"
pub const LOAN_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// An active loan row
///
/// Every row present in the loan store is an active loan; returned loans are
/// removed rather than archived. The record carries no stable reference to a
/// catalog row: matching back on return is by exact (title, author) equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub borrower: String,
    pub title: String,
    pub author: String,
    /// Local time at lending, preformatted with [`LOAN_TIMESTAMP_FORMAT`]
    #[serde(rename = "loanTimestamp")]
    pub loaned_at: String,
}

impl Loan {
    /// Create a loan stamped with the current local time
    pub fn now(
        borrower: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            borrower: borrower.into(),
            title: title.into(),
            author: author.into(),
            loaned_at: Local::now().format(LOAN_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl std::fmt::Display for Loan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} - {}",
            self.title, self.author, self.borrower, self.loaned_at
        )
    }
}
