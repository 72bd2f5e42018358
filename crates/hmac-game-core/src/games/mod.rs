//! Move sets and the rules of the game.

mod help_table;
mod move_set;
mod outcome;
mod selector;

pub use help_table::{help_table, HelpTable};
pub use move_set::MoveSet;
pub use outcome::{determine_outcome, Outcome};
pub use selector::select_move;
