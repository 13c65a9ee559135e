//! Helpers shared by the entropy engine and the tree builder.
pub mod checker;
pub mod constants;
pub mod group_by;

pub use group_by::{group_by, Groups};
