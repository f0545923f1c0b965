//! The script browsing screens.

pub mod dialogue;
pub mod scene;
pub mod story_line;
