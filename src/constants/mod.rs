//! Tuning values for the generator and the floor stack.

mod dungeon;
mod floors;

pub use dungeon::*;
pub use floors::*;
