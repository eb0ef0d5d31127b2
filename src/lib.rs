//! Weighted graphs keyed by vertex name, a contraction hierarchy style
//! shortcut builder on top of them, and an indexed binary heap for the
//! searches that consume the result.

pub mod ch;
pub mod error;
pub mod graphs;
pub mod queue;
pub mod utility;

pub use error::{FactoryError, GraphError, HeapError};
