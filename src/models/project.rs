use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::ArchDocError;

/// The project a documentation tree belongs to.
///
/// `section_names` is ordered: it defines both the directory layout under
/// `doc_root` and the order of entries in the generated table of contents.
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    pub name: String,
    pub description: String,
    /// Root of the documentation tree on disk.
    pub doc_root: PathBuf,
    pub section_names: Vec<String>,
}

impl ProjectMetadata {
    /// Build project metadata, rejecting duplicate section names.
    ///
    /// Duplicates would collide on the same section directory and file, so
    /// they are refused up front rather than silently overwriting each other.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        doc_root: impl Into<PathBuf>,
        section_names: Vec<String>,
    ) -> Result<Self, ArchDocError> {
        let mut seen = HashSet::new();
        for section_name in &section_names {
            if !seen.insert(section_name.as_str()) {
                return Err(ArchDocError::DuplicateSection(section_name.clone()));
            }
        }

        Ok(Self {
            name: name.into(),
            description: description.into(),
            doc_root: doc_root.into(),
            section_names,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_sections() {
        let result = ProjectMetadata::new(
            "Demo",
            "A demo",
            "docs",
            vec!["Introduction".to_string(), "Introduction".to_string()],
        );
        assert!(matches!(
            result,
            Err(ArchDocError::DuplicateSection(name)) if name == "Introduction"
        ));
    }

    #[test]
    fn test_accepts_unique_sections() {
        let metadata = ProjectMetadata::new(
            "Demo",
            "A demo",
            "docs",
            vec!["Introduction".to_string(), "Overview".to_string()],
        )
        .expect("unique sections should be accepted");
        assert_eq!(metadata.section_names.len(), 2);
    }
}
