//! Repository abstractions for reading project content.
//!
//! Both repositories are read services: every call returns a fresh, owned
//! copy of the collection, so callers never share mutable state with the
//! source of truth.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::model::{CharacterProfile, Script};

/// Supplies the scripts of a project.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Load all scripts for a project, in repository order.
    ///
    /// An unknown project yields an empty list, not an error.
    async fn get_scripts(&self, project_id: &str) -> Result<Vec<Script>, DomainError>;
}

/// Supplies the characters of a project.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Load all characters for a project, in repository order.
    async fn get_characters(
        &self,
        project_id: &str,
    ) -> Result<Vec<CharacterProfile>, DomainError>;
}
