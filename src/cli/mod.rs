//! Driver code behind the `dgraph` binary.

pub mod commands;
pub mod session;

pub use commands::{cmd_demo, cmd_run, RunOptions, SessionReport, TraversalReport};
pub use session::{Order, Representation, Session};
