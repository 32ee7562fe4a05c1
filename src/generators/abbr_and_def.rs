use std::path::PathBuf;

use anyhow::Result;

use super::{scaffold, write_section, SectionGenerator};

const BOILERPLATE: &str =
    "Explains the basic abbreviations, definitions and terms used in this project.";

/// Generator for the abbreviations-and-definitions section.
///
/// Holds two separate term lists, `abbreviations` and `defines`. Each list
/// preserves insertion order, which drives rendering order; re-adding an
/// existing name replaces its value in place. A list that is empty at
/// generation time renders no subsection at all.
pub struct AbbrAndDefGenerator {
    section_name: String,
    description: String,
    doc_root: PathBuf,
    abbreviations: Vec<(String, String)>,
    defines: Vec<(String, String)>,
}

impl AbbrAndDefGenerator {
    pub fn new(
        section_name: impl Into<String>,
        description: impl Into<String>,
        doc_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            section_name: section_name.into(),
            description: description.into(),
            doc_root: doc_root.into(),
            abbreviations: Vec::new(),
            defines: Vec::new(),
        }
    }

    pub fn add_abbreviation(&mut self, name: impl Into<String>, value: impl Into<String>) {
        upsert(&mut self.abbreviations, name.into(), value.into());
    }

    pub fn add_define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        upsert(&mut self.defines, name.into(), value.into());
    }

    fn render_term_list(output: &mut String, heading: &str, entries: &[(String, String)]) {
        if entries.is_empty() {
            return;
        }
        output.push_str(&format!("\n## {heading}\n"));
        for (name, value) in entries {
            output.push_str(&format!(" + **{name}**: {value}\n"));
        }
    }
}

/// Insert or update an entry, keeping the original position on update.
fn upsert(entries: &mut Vec<(String, String)>, name: String, value: String) {
    match entries.iter_mut().find(|(existing, _)| *existing == name) {
        Some((_, existing_value)) => *existing_value = value,
        None => entries.push((name, value)),
    }
}

impl SectionGenerator for AbbrAndDefGenerator {
    fn section_name(&self) -> &str {
        &self.section_name
    }

    fn generate_section(&self) -> Result<()> {
        let mut contents = scaffold(&self.section_name, BOILERPLATE);
        contents.push_str(&self.description);
        contents.push('\n');

        Self::render_term_list(&mut contents, "Abbreviations", &self.abbreviations);
        Self::render_term_list(&mut contents, "Defines", &self.defines);

        write_section(&self.doc_root, &self.section_name, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_preserves_insertion_order() {
        let mut entries = Vec::new();
        upsert(&mut entries, "KISS".to_string(), "keep it simple".to_string());
        upsert(&mut entries, "DRY".to_string(), "don't repeat yourself".to_string());
        upsert(&mut entries, "KISS".to_string(), "Keep It Simple, Stupid".to_string());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "KISS");
        assert_eq!(entries[0].1, "Keep It Simple, Stupid");
        assert_eq!(entries[1].0, "DRY");
    }

    #[test]
    fn test_empty_lists_render_nothing() {
        let mut output = String::new();
        AbbrAndDefGenerator::render_term_list(&mut output, "Abbreviations", &[]);
        assert!(output.is_empty());
    }

    #[test]
    fn test_term_list_rendering() {
        let mut output = String::new();
        let entries = vec![("CMake".to_string(), "Crossplatform build system".to_string())];
        AbbrAndDefGenerator::render_term_list(&mut output, "Defines", &entries);
        assert_eq!(output, "\n## Defines\n + **CMake**: Crossplatform build system\n");
    }
}
