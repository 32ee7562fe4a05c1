//! Project configuration.
//!
//! A run is described by an `archdoc.json` file in the working directory (or
//! wherever `--config` points). A missing file falls back to built-in
//! defaults; a present but malformed file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "archdoc.json";

/// One named term, kept as an object (not a JSON map) so that the order the
/// entries were written in survives the round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermEntry {
    pub name: String,
    pub value: String,
}

/// Configuration for the introduction section generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroductionConfig {
    /// Section this generator writes into. Should be one of `sections` for
    /// the table of contents to link it.
    pub section: String,
    pub description: String,
}

/// Configuration for the abbreviations-and-definitions section generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsConfig {
    pub section: String,
    pub description: String,
    #[serde(default)]
    pub abbreviations: Vec<TermEntry>,
    #[serde(default)]
    pub defines: Vec<TermEntry>,
}

/// Everything a documentation run needs to know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchDocConfig {
    pub project_name: String,
    pub project_description: String,
    pub doc_root: PathBuf,
    /// Ordered section list; drives directory layout and table-of-contents
    /// order.
    pub sections: Vec<String>,
    pub introduction: Option<IntroductionConfig>,
    pub terms: Option<TermsConfig>,
}

impl Default for ArchDocConfig {
    fn default() -> Self {
        Self {
            project_name: "ArchDoc Toolkit".to_string(),
            project_description: "A set of tools for creating and managing a project \
                following the Architecture Document methodology"
                .to_string(),
            doc_root: PathBuf::from("app/docs"),
            sections: [
                "Introduction",
                "Architecture Overview",
                "Component Diagrams",
                "Deployment Diagram",
                "Key Architectural Decisions",
                "Abbreviations and Definitions",
            ]
            .map(String::from)
            .to_vec(),
            introduction: Some(IntroductionConfig {
                section: "Introduction".to_string(),
                description: "An introduction to the project".to_string(),
            }),
            terms: Some(TermsConfig {
                section: "Abbreviations and Definitions".to_string(),
                description: "All definitions and abbreviations from the project".to_string(),
                abbreviations: vec![],
                defines: vec![],
            }),
        }
    }
}

impl ArchDocConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections() {
        let config = ArchDocConfig::default();
        assert_eq!(config.sections.len(), 6);
        assert_eq!(config.sections[0], "Introduction");
        assert_eq!(config.sections[5], "Abbreviations and Definitions");
        assert_eq!(config.doc_root, PathBuf::from("app/docs"));
    }

    #[test]
    fn test_parse_preserves_term_order() {
        let json = r#"{
            "project_name": "Demo",
            "project_description": "A demo project",
            "doc_root": "docs",
            "sections": ["Abbreviations and Definitions"],
            "introduction": null,
            "terms": {
                "section": "Abbreviations and Definitions",
                "description": "Terms",
                "abbreviations": [
                    {"name": "KISS", "value": "Keep It Simple, Stupid"},
                    {"name": "DRY", "value": "Don't Repeat Yourself"}
                ]
            }
        }"#;

        let config: ArchDocConfig = serde_json::from_str(json).expect("config should parse");
        let terms = config.terms.expect("terms should be present");
        assert_eq!(terms.abbreviations[0].name, "KISS");
        assert_eq!(terms.abbreviations[1].name, "DRY");
        assert!(terms.defines.is_empty());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("archdoc.json");
        fs::write(&path, "{ not json").expect("write");
        assert!(ArchDocConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let config =
            ArchDocConfig::load(Path::new("/nonexistent/archdoc.json")).expect("defaults");
        assert_eq!(config.project_name, "ArchDoc Toolkit");
    }
}
