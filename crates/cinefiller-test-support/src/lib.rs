//! Shared test mocks and fixtures for Cinefiller.

pub mod fixtures;
mod repository;

pub use repository::{
    DelayedContentRepository, FailingCharacterRepository, FailingContentRepository,
    FlakyContentRepository, InMemoryCharacterRepository, InMemoryContentRepository,
};
