//! The documentation manager: owns project metadata and the generator
//! registry, and drives directory initialization, table-of-contents
//! regeneration and section generation.

use std::fs;

use anyhow::Result;

use crate::generators::SectionGenerator;
use crate::models::ProjectMetadata;
use crate::paths;

/// Name of the generated table-of-contents file under the doc root.
pub const TOC_FILE: &str = "ArchDoc.md";

/// Owns the project metadata and an ordered, append-only registry of
/// section generators.
///
/// Every operation is an idempotent transformation of the filesystem.
/// Callers are expected to run [`initialize_project`] before
/// [`generate_sections`] so the section directories exist; the manager does
/// not enforce that ordering.
///
/// [`initialize_project`]: DocumentationManager::initialize_project
/// [`generate_sections`]: DocumentationManager::generate_sections
pub struct DocumentationManager {
    metadata: ProjectMetadata,
    generators: Vec<Box<dyn SectionGenerator>>,
}

impl DocumentationManager {
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self {
            metadata,
            generators: Vec::new(),
        }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    /// Create the doc root and one subdirectory per configured section.
    ///
    /// Pre-existing directories are left untouched; re-running is not an
    /// error.
    pub fn initialize_project(&self) -> Result<()> {
        fs::create_dir_all(&self.metadata.doc_root)?;

        for section_name in &self.metadata.section_names {
            fs::create_dir_all(paths::section_dir(&self.metadata.doc_root, section_name))?;
        }

        tracing::info!("Project '{}' initialized", self.metadata.name);
        Ok(())
    }

    /// Rewrite `ArchDoc.md` in full: one bullet per configured section, in
    /// order, followed by a rule and the project description.
    ///
    /// Link targets are derived from the section names alone and are not
    /// verified to exist.
    pub fn update_table_of_contents(&self) -> Result<()> {
        let mut contents = String::from("# Table of contents\n\n");

        for section_name in &self.metadata.section_names {
            let normalized = paths::normalize(section_name);
            contents.push_str(&format!(
                "- [{section_name}](./{normalized}/{normalized}.md)\n"
            ));
        }

        contents.push_str("\n---\n\n");
        contents.push_str(&self.metadata.description);

        fs::write(self.metadata.doc_root.join(TOC_FILE), contents)?;

        tracing::info!("Table of contents updated");
        Ok(())
    }

    /// Append a generator to the registry.
    ///
    /// The generator's section name is not checked against the configured
    /// section list; a mismatch silently produces an orphan file or a dead
    /// table-of-contents link.
    pub fn register_section_generator(&mut self, generator: Box<dyn SectionGenerator>) {
        tracing::info!("Registered section generator: {}", generator.section_name());
        self.generators.push(generator);
    }

    /// Run every registered generator, in registration order.
    ///
    /// The first failure propagates and halts the remaining generators.
    pub fn generate_sections(&self) -> Result<()> {
        for generator in &self.generators {
            generator.generate_section()?;
            tracing::info!("Generated section: {}", generator.section_name());
        }
        Ok(())
    }
}
