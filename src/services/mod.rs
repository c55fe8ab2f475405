//! Business logic services

pub mod circulation;
pub mod directory;

use crate::repository::Repository;

/// Container for all services
#[derive(Debug, Clone)]
pub struct Services {
    pub circulation: circulation::CirculationService,
    pub directory: directory::DirectoryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            circulation: circulation::CirculationService::new(repository.clone()),
            directory: directory::DirectoryService::new(repository),
        }
    }
}
