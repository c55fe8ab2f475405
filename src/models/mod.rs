//! Data models for Biblius

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::Book;
pub use loan::{Loan, LOAN_TIMESTAMP_FORMAT};
pub use user::User;
