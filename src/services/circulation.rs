//! Circulation service: book registration, lending, return, search

use crate::{
    error::{AppError, AppResult},
    models::{Book, Loan},
    repository::Repository,
};

#[derive(Debug, Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new book in the catalog
    ///
    /// The quantity comes in as raw console text; anything that does not
    /// parse as a non-negative integer falls back to 1. Title and author
    /// are accepted as-is, including empty strings.
    pub fn register_book(
        &self,
        title: &str,
        author: &str,
        publication_date: &str,
        quantity: &str,
    ) -> AppResult<Book> {
        let quantity = quantity.trim().parse::<u32>().unwrap_or(1);
        let book = Book::new(title, author, publication_date, quantity);
        self.repository.catalog.append(&book)?;

        tracing::info!(title = %book.title, quantity = book.quantity, "registered book");
        Ok(book)
    }

    /// Full catalog in insertion order; empty when no book was registered
    pub fn list_stock(&self) -> AppResult<Vec<Book>> {
        self.repository.catalog.load()
    }

    /// Lend one copy of the selected book
    ///
    /// The catalog is re-listed inside the call and `selection` interpreted
    /// as a 1-based index into that listing, so the index cannot drift from
    /// what was last displayed. Rejections leave both stores untouched.
    pub fn lend(&self, selection: &str, borrower: &str) -> AppResult<Loan> {
        let mut books = self.repository.catalog.load()?;
        if books.is_empty() {
            return Err(AppError::NotFound("no books registered".to_string()));
        }

        let index = parse_selection(selection, books.len())?;
        let book = &mut books[index];
        if book.quantity == 0 {
            return Err(AppError::BusinessRule(format!(
                "'{}' is not available for lending",
                book.title
            )));
        }

        book.quantity -= 1;
        let loan = Loan::now(borrower, &book.title, &book.author);

        // Catalog rewrite first, then the loan row. A crash between the two
        // leaves the stores mutually inconsistent; there is no transaction.
        self.repository.catalog.save(&books)?;
        self.repository.loans.append(&loan)?;

        tracing::info!(title = %loan.title, borrower = %loan.borrower, "lent book");
        Ok(loan)
    }

    /// Every active loan, in stored order
    ///
    /// A store that was never created reads as "no loans registered"; one
    /// holding only its header as "no active loans".
    pub fn list_active_loans(&self) -> AppResult<Vec<Loan>> {
        if !self.repository.loans.exists() {
            return Err(AppError::NotFound("no loans registered".to_string()));
        }
        let loans = self.repository.loans.load()?;
        if loans.is_empty() {
            return Err(AppError::NotFound("no active loans".to_string()));
        }
        Ok(loans)
    }

    /// Return the selected loan and restock the matching catalog row
    ///
    /// The stock is listed before the loans, as at the console: an empty or
    /// missing catalog aborts the return without touching either store.
    /// `selection` is a 1-based index into the active-loan listing taken
    /// inside this call. The loan row is deleted, not archived. The first
    /// catalog row with the same (title, author) gets its quantity bumped;
    /// when none matches the catalog contents stay as they were, though
    /// both files are still rewritten.
    pub fn return_loan(&self, selection: &str) -> AppResult<Loan> {
        let mut books = self.repository.catalog.load()?;
        if books.is_empty() {
            return Err(AppError::NotFound("no books registered".to_string()));
        }

        let mut loans = self.list_active_loans()?;
        let index = parse_selection(selection, loans.len())?;
        let returned = loans.remove(index);

        if let Some(book) = books
            .iter_mut()
            .find(|b| b.title == returned.title && b.author == returned.author)
        {
            book.quantity += 1;
        }

        self.repository.catalog.save(&books)?;
        self.repository.loans.save(&loans)?;

        tracing::info!(title = %returned.title, borrower = %returned.borrower, "returned book");
        Ok(returned)
    }

    /// Case-insensitive substring search over title and author
    pub fn search(&self, filter: &str) -> AppResult<Vec<Book>> {
        self.repository.catalog.search(filter.trim())
    }
}

/// Parse a 1-based selection index against a listing of `len` entries
fn parse_selection(input: &str, len: usize) -> AppResult<usize> {
    let choice = input
        .trim()
        .parse::<usize>()
        .map_err(|_| AppError::InvalidSelection("input is not a number".to_string()))?;
    if choice < 1 || choice > len {
        return Err(AppError::InvalidSelection(format!(
            "number {} out of range",
            choice
        )));
    }
    Ok(choice - 1)
}
