//! User record model

use serde::{Deserialize, Serialize};

/// A registered library user
///
/// Used only to gate access at login; the circulation flow references
/// borrowers by free-text name, not by directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub identifier: String,
}

impl User {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}
