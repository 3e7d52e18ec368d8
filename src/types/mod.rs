//! All data types shared by both graph representations.

pub mod edge;
pub mod error;
pub mod label;

pub use edge::{Edge, EdgeKind};
pub use error::{GraphError, GraphResult};
pub use label::Label;
