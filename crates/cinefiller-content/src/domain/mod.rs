//! Pure lookup and presentation rules over content entities.

pub mod lookup;
pub mod preview;
