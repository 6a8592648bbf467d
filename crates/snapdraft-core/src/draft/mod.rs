// Draft state: board, roster, and snake ordering.

pub mod board;
pub mod order;
pub mod roster;

pub use board::{BoardSettings, BoardSnapshot, DraftAction, DraftBoard, PositionToggle, RankSet};
