//! Application layer: configuration loading, event routing, shutdown.

pub mod coordinator;
pub mod lifecycle;
pub mod parse;

pub use coordinator::DrawNumberApp;
pub use lifecycle::{Lifecycle, LifecycleState};
pub use parse::{parse_configuration, ParsedConfiguration};
