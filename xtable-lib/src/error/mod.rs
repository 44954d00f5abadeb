//! Error types

mod access;
mod data;
mod options;

pub use access::*;
pub use data::*;
pub use options::*;
