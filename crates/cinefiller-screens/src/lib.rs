//! Cinefiller — screen state for script browsing.
//!
//! Each screen is a small state machine (`Loading`, `Ready`, `Failed`) driven
//! by explicit messages. A [`controller::ScreenController`] turns parameter
//! changes into repository fetches and feeds the results back, discarding any
//! result that belongs to a superseded fetch.

pub mod controller;
pub mod screen;
pub mod screens;
pub mod state;
