//! Section name normalization and on-disk path derivation.

use std::path::{Path, PathBuf};

/// Turn a section name into its filesystem-safe form.
///
/// Every space becomes an underscore; nothing else (case, punctuation,
/// Unicode) is touched.
pub fn normalize(section_name: &str) -> String {
    section_name.replace(' ', "_")
}

/// Directory that holds a section's file: `<doc_root>/<normalized>`.
pub fn section_dir(doc_root: &Path, section_name: &str) -> PathBuf {
    doc_root.join(normalize(section_name))
}

/// The section's markdown file: `<doc_root>/<normalized>/<normalized>.md`.
pub fn section_file(doc_root: &Path, section_name: &str) -> PathBuf {
    let normalized = normalize(section_name);
    doc_root.join(&normalized).join(format!("{normalized}.md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_replaces_spaces() {
        assert_eq!(normalize("Component Diagrams"), "Component_Diagrams");
        assert_eq!(
            normalize("Key Architectural Decisions"),
            "Key_Architectural_Decisions"
        );
    }

    #[test]
    fn test_normalize_leaves_everything_else() {
        assert_eq!(normalize("Introduction"), "Introduction");
        assert_eq!(normalize("FAQ & Caveats"), "FAQ_&_Caveats");
        assert_eq!(normalize("überblick"), "überblick");
    }

    #[test]
    fn test_section_file_layout() {
        let file = section_file(Path::new("docs"), "Component Diagrams");
        assert_eq!(
            file,
            Path::new("docs/Component_Diagrams/Component_Diagrams.md")
        );
    }
}
