//! Section generators.
//!
//! A [`SectionGenerator`] renders exactly one documentation section to its
//! own markdown file. Two variants exist: [`IntroductionGenerator`] and
//! [`AbbrAndDefGenerator`]. The manager drives them through the trait; they
//! know nothing about each other.

mod abbr_and_def;
mod introduction;

pub use abbr_and_def::AbbrAndDefGenerator;
pub use introduction::IntroductionGenerator;

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use crate::paths;

/// A component that knows how to render one section's content.
///
/// The only observable effect of [`generate_section`] is writing (creating
/// or overwriting) one file at `<doc_root>/<normalized>/<normalized>.md`.
/// Filesystem failures propagate unchanged; there is no retry or fallback.
///
/// [`generate_section`]: SectionGenerator::generate_section
pub trait SectionGenerator {
    /// The section this generator owns.
    fn section_name(&self) -> &str;

    /// Render the section and write it to its deterministic path.
    fn generate_section(&self) -> Result<()>;
}

/// Shared structural scaffold: heading, last-updated line, boilerplate
/// sentence, horizontal rule. Every variant opens its file through this so
/// the structure cannot drift per-variant.
fn scaffold(section_name: &str, boilerplate: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {section_name}\n\n"));
    output.push_str(&format!(
        "*Last updated: {}*\n\n",
        Utc::now().format("%Y-%m-%d")
    ));
    output.push_str(boilerplate);
    output.push_str("\n\n---\n\n");
    output
}

/// Write a fully rendered section file, overwriting any previous version.
fn write_section(doc_root: &Path, section_name: &str, contents: &str) -> Result<()> {
    let path = paths::section_file(doc_root, section_name);
    fs::write(&path, contents)?;
    tracing::info!("Template for '{}' section generated", section_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_shape() {
        let output = scaffold("Introduction", "Say something useful.");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "# Introduction");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("*Last updated: "));
        assert!(lines[2].ends_with('*'));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Say something useful.");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "---");
        assert!(output.ends_with("---\n\n"));
    }
}
