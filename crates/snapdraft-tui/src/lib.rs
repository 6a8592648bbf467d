// Terminal front end for the draft board.

pub mod app;
pub mod cli;
pub mod layout;
pub mod widgets;

#[cfg(test)]
mod testing;
