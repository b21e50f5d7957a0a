//! Interactive game loop

pub mod repl;
