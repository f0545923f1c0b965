//! Test repositories — mock `ContentRepository` and `CharacterRepository`
//! implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use cinefiller_core::error::DomainError;
use cinefiller_core::model::{CharacterProfile, Script};
use cinefiller_core::repository::{CharacterRepository, ContentRepository};

/// A content repository backed by a fixed list of scripts. Scripts are
/// grouped by their `project_id` and returned in insertion order. Every
/// `get_scripts` call is recorded.
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    scripts: Vec<Script>,
    requested: Mutex<Vec<String>>,
}

impl InMemoryContentRepository {
    /// Create a repository serving `scripts`.
    #[must_use]
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Returns the project ids passed to `get_scripts`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested_projects(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn get_scripts(&self, project_id: &str) -> Result<Vec<Script>, DomainError> {
        self.requested.lock().unwrap().push(project_id.to_owned());
        Ok(self
            .scripts
            .iter()
            .filter(|script| script.project_id == project_id)
            .cloned()
            .collect())
    }
}

/// A character repository backed by per-project character lists.
#[derive(Debug, Default)]
pub struct InMemoryCharacterRepository {
    characters: HashMap<String, Vec<CharacterProfile>>,
}

impl InMemoryCharacterRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the characters of a project.
    #[must_use]
    pub fn with_characters(
        mut self,
        project_id: impl Into<String>,
        characters: Vec<CharacterProfile>,
    ) -> Self {
        self.characters.insert(project_id.into(), characters);
        self
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn get_characters(
        &self,
        project_id: &str,
    ) -> Result<Vec<CharacterProfile>, DomainError> {
        Ok(self
            .characters
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// A content repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingContentRepository;

#[async_trait]
impl ContentRepository for FailingContentRepository {
    async fn get_scripts(&self, _project_id: &str) -> Result<Vec<Script>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// A character repository that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingCharacterRepository;

#[async_trait]
impl CharacterRepository for FailingCharacterRepository {
    async fn get_characters(
        &self,
        _project_id: &str,
    ) -> Result<Vec<CharacterProfile>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// Fails the first `failures` calls, then delegates to the inner repository.
/// Used to exercise retry after a failed load.
#[derive(Debug)]
pub struct FlakyContentRepository<R> {
    inner: R,
    failures_remaining: AtomicUsize,
}

impl<R> FlakyContentRepository<R> {
    /// Wrap `inner` so that its first `failures` calls fail.
    #[must_use]
    pub fn new(inner: R, failures: usize) -> Self {
        Self {
            inner,
            failures_remaining: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl<R: ContentRepository> ContentRepository for FlakyContentRepository<R> {
    async fn get_scripts(&self, project_id: &str) -> Result<Vec<Script>, DomainError> {
        let failed = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(DomainError::Infrastructure("connection reset".into()));
        }
        self.inner.get_scripts(project_id).await
    }
}

/// Sleeps before delegating, with a per-project delay. Projects without a
/// configured delay are served immediately. Used to stage out-of-order
/// responses.
#[derive(Debug)]
pub struct DelayedContentRepository<R> {
    inner: R,
    delays: HashMap<String, Duration>,
}

impl<R> DelayedContentRepository<R> {
    /// Wrap `inner` with no delays configured.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delays: HashMap::new(),
        }
    }

    /// Delay every `get_scripts` call for `project_id` by `delay`.
    #[must_use]
    pub fn with_delay(mut self, project_id: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(project_id.into(), delay);
        self
    }

    /// The wrapped repository.
    #[must_use]
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: ContentRepository> ContentRepository for DelayedContentRepository<R> {
    async fn get_scripts(&self, project_id: &str) -> Result<Vec<Script>, DomainError> {
        if let Some(delay) = self.delays.get(project_id) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.get_scripts(project_id).await
    }
}
