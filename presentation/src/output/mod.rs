//! Console output for the game

pub mod console;
