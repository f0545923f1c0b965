//! Cinefiller — content lookup.
//!
//! Responsible for locating scripts, scenes and dialogue lines within a
//! project, resolving scene character references, and building the read-only
//! views the script screens display.

pub mod application;
pub mod domain;
