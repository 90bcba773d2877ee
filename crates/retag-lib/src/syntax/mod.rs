//! Tagged syntax tree: node model, tag vocabulary and status lattice.

mod diff;
mod dump;
mod node;
mod status;
mod tag;
pub mod unicode;


pub use diff::{Comparison, Mismatch};
pub use node::{Node, NodeList, Repeat, Walk};
pub use status::Status;
pub use tag::Tag;
