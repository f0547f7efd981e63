//! Pure gamification rules
//!
//! These functions carry no state and perform no I/O; the engine composes
//! them with the persistence and presentation collaborators.

pub mod levels;
pub mod streaks;
