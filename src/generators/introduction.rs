use std::path::PathBuf;

use anyhow::Result;

use super::{scaffold, write_section, SectionGenerator};

const BOILERPLATE: &str = "Provide a comprehensive introduction to the project, \
including its purpose, key features and overall architecture.";

/// Generator for the project's introduction section.
///
/// Renders the shared scaffold followed by the configured free-text
/// description, verbatim.
pub struct IntroductionGenerator {
    section_name: String,
    description: String,
    doc_root: PathBuf,
}

impl IntroductionGenerator {
    pub fn new(
        section_name: impl Into<String>,
        description: impl Into<String>,
        doc_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            section_name: section_name.into(),
            description: description.into(),
            doc_root: doc_root.into(),
        }
    }
}

impl SectionGenerator for IntroductionGenerator {
    fn section_name(&self) -> &str {
        &self.section_name
    }

    fn generate_section(&self) -> Result<()> {
        let mut contents = scaffold(&self.section_name, BOILERPLATE);
        contents.push_str(&self.description);
        write_section(&self.doc_root, &self.section_name, &contents)
    }
}
