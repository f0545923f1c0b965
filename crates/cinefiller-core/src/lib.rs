//! Cinefiller Core — shared domain model and abstractions.
//!
//! This crate defines the content entities (scripts, scenes, dialogue lines,
//! characters) and the repository traits every other crate depends on. It
//! contains no infrastructure code.

pub mod error;
pub mod model;
pub mod repository;
