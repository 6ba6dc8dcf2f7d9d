use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cram::storage::{DeckDiscovery, FileDeckStore, group_by_category};
use cram::{Config, DeckReference, tui};

#[derive(Parser)]
#[command(name = "cram", about = "A terminal flashcard app for studying", version)]
struct Cli {
    /// Deck to study, e.g. `tutorial` or `languages/spanish` (opens the deck browser when omitted)
    #[arg(long)]
    deck: Option<String>,

    /// Directory holding the decks (default: ~/.cram)
    #[arg(long, global = true, env = "CRAM_DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List all available decks by category
    Ls,

    /// Copy a deck JSON file into the deck directory
    Add {
        /// Path to the deck file
        file: PathBuf,
        /// Category to file the deck under
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.dir).context("Failed to initialize the deck directory")?;

    match cli.command {
        None => {
            let reference = cli
                .deck
                .map(|deck| DeckReference::new(deck.trim_end_matches(".json")));
            tui::run_study_session(&config, reference)?;
        }
        Some(Command::Ls) => list_decks(&config)?,
        Some(Command::Add { file, category }) => {
            let store = FileDeckStore::new(&config);
            let reference = store
                .add_deck_file(&file, category.as_deref())
                .with_context(|| format!("Failed to add deck {}", file.display()))?;
            println!("✓ Deck added as {}", reference);
        }
    }

    Ok(())
}

fn list_decks(config: &Config) -> anyhow::Result<()> {
    let store = FileDeckStore::new(config);
    let groups = group_by_category(store.list_decks()?);

    if groups.is_empty() {
        println!("No decks found in {}", config.deck_dir.display());
        return Ok(());
    }

    println!("Available Decks:");
    println!();
    for group in groups {
        println!("📂 {}", group.category);
        for deck in group.decks {
            println!("   └─ {} ({})", deck.name, deck.reference);
        }
        println!();
    }
    Ok(())
}
