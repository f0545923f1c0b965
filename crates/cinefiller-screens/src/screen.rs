//! Screen abstraction.

use std::fmt;

use async_trait::async_trait;
use cinefiller_core::error::DomainError;

/// A screen that resolves its data from navigation parameters.
#[async_trait]
pub trait Screen: Send + Sync + 'static {
    /// Navigation parameters; a change triggers a fresh load.
    type Params: Clone + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// The resolved data the screen displays.
    type Data: Clone + fmt::Debug + Send + 'static;

    /// Screen name (for logging).
    const NAME: &'static str;

    /// Loads the data for `params`. `Ok(None)` means the target does not exist.
    async fn load(&self, params: &Self::Params) -> Result<Option<Self::Data>, DomainError>;
}
