//! Repository layer: flat-file record stores
//!
//! Each store follows the same cycle on mutation: read the whole file,
//! change rows in memory, rewrite the whole file. There is no locking and
//! no transaction spanning the catalog and loan rewrites; exactly one
//! process is assumed to touch the files at a time.

pub mod catalog;
pub mod loans;
pub mod users;

use crate::config::StorageConfig;

/// Main repository struct holding the three record stores
#[derive(Debug, Clone)]
pub struct Repository {
    pub catalog: catalog::CatalogStore,
    pub loans: loans::LoanStore,
    pub users: users::UserDirectory,
}

impl Repository {
    /// Create a new repository over the configured store files
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            catalog: catalog::CatalogStore::new(&storage.catalog_file),
            loans: loans::LoanStore::new(&storage.loans_file),
            users: users::UserDirectory::new(&storage.users_file),
        }
    }
}
