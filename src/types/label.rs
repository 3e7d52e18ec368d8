//! Node label bound.

use std::fmt::{Debug, Display};

/// A node label: the only payload a node carries.
///
/// Labels must be totally ordered (list-form printing is label-sorted) and
/// printable. Implemented for every type meeting the bounds, so `char`,
/// `String`, `&str` and integers all work.
pub trait Label: Ord + Clone + Display + Debug {}

impl<T: Ord + Clone + Display + Debug> Label for T {}
