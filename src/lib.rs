//! Scaffolding and upkeep for an "Architecture Document" documentation tree.
//!
//! The crate lays out one subdirectory per documentation section under a
//! configured doc root, writes markdown templates into them, and maintains a
//! generated `ArchDoc.md` table of contents linking the sections.
//!
//! The moving parts are small: [`generators::SectionGenerator`] is the
//! contract for rendering one section to its file, and
//! [`manager::DocumentationManager`] owns the project metadata plus an
//! ordered registry of generators and drives the whole run. Everything is
//! synchronous; each run regenerates its files in full.

pub mod config;
pub mod error;
pub mod generators;
pub mod manager;
pub mod models;
pub mod paths;
