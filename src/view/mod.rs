//! Views: the contract and the concrete console and log views.
//!
//! Any number of views can be attached to one game. Each receives every
//! event, in the order the views were registered.

pub mod console;
pub mod print_stream;
pub mod traits;

pub use console::{Command, ConsoleView};
pub use print_stream::PrintStreamView;
pub use traits::{DrawNumberView, DrawNumberViewObserver};
