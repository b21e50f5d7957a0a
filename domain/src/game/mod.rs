//! Game domain.
//!
//! - [`answer::Answer`]: the player's answer vocabulary
//! - [`limits::TurnLimits`]: soft/hard question budgets
//! - [`state::GameState`]: one game's transcript, counters and terminal status

pub mod answer;
pub mod limits;
pub mod state;
