use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archdoc::config::{ArchDocConfig, DEFAULT_CONFIG_FILE};
use archdoc::generators::{AbbrAndDefGenerator, IntroductionGenerator};
use archdoc::manager::DocumentationManager;
use archdoc::models::ProjectMetadata;

#[derive(Parser)]
#[command(name = "archdoc")]
#[command(about = "Scaffold and maintain an Architecture Document tree")]
struct Cli {
    /// Path to the project config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the documentation directory tree and the table of contents
    Init,
    /// Full run: initialize, table of contents, then every section template
    Generate,
    /// Rewrite the table of contents only
    Toc,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "archdoc=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the manager and register the generators the config describes.
fn build_manager(config: ArchDocConfig) -> anyhow::Result<DocumentationManager> {
    let metadata = ProjectMetadata::new(
        config.project_name,
        config.project_description,
        config.doc_root.clone(),
        config.sections,
    )?;

    let mut manager = DocumentationManager::new(metadata);

    if let Some(intro) = config.introduction {
        manager.register_section_generator(Box::new(IntroductionGenerator::new(
            intro.section,
            intro.description,
            config.doc_root.clone(),
        )));
    }

    if let Some(terms) = config.terms {
        let mut generator =
            AbbrAndDefGenerator::new(terms.section, terms.description, config.doc_root.clone());
        for entry in terms.abbreviations {
            generator.add_abbreviation(entry.name, entry.value);
        }
        for entry in terms.defines {
            generator.add_define(entry.name, entry.value);
        }
        manager.register_section_generator(Box::new(generator));
    }

    Ok(manager)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ArchDocConfig::load(&cli.config)?;
    let manager = build_manager(config)?;

    match cli.command {
        Some(Commands::Init) => {
            manager.initialize_project()?;
            manager.update_table_of_contents()?;
        }
        Some(Commands::Toc) => {
            manager.update_table_of_contents()?;
        }
        // Default: full run
        Some(Commands::Generate) | None => {
            manager.initialize_project()?;
            manager.update_table_of_contents()?;
            manager.generate_sections()?;
        }
    }

    Ok(())
}
