//! User directory service: registration and login validation

use crate::{
    error::AppResult,
    models::User,
    repository::Repository,
};

#[derive(Debug, Clone)]
pub struct DirectoryService {
    repository: Repository,
}

impl DirectoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new user (append-only, duplicates permitted)
    pub fn register(&self, name: &str, identifier: &str) -> AppResult<User> {
        let user = User::new(name, identifier);
        self.repository.users.append(&user)?;

        tracing::info!(name = %user.name, "registered user");
        Ok(user)
    }

    /// Whether an exact (name, identifier) row exists in the directory
    pub fn validate(&self, name: &str, identifier: &str) -> AppResult<bool> {
        self.repository.users.exists_user(name, identifier)
    }
}
