//! The game model: a hidden number and an attempt budget.

pub mod draw_number;
pub mod result;

pub use draw_number::{DrawNumber, DrawNumberImpl};
pub use result::{DrawResult, Outcome};
