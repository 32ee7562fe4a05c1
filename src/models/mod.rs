//! Domain models for archdoc.
//!
//! There is exactly one: [`ProjectMetadata`], the immutable description of
//! the project a documentation run is working on. Generators and the manager
//! borrow from it; nothing here outlives the process.

mod project;

pub use project::*;
