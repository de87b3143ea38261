pub mod line;
pub mod range;

pub use line::{LineRef, Scheme};
pub use range::{SelectionRange, SelectionState};
