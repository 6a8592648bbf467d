// Library root: player data, positions, configuration, and the draft board
// that feeds the terminal UI.

pub mod config;
pub mod draft;
pub mod player;
pub mod position;
pub mod projections;
