use clap::{Parser, Subcommand};
use stok::index::DisplayIndex;
use stok::model::Unit;

#[derive(Parser, Debug)]
#[command(name = "stok")]
#[command(version = env!("STOK_LONG_VERSION"))]
#[command(about = "Keep track of inventory items in a plain JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user store instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a record
    #[command(alias = "a")]
    Add {
        /// Item name
        name: Option<String>,

        /// Quantity (digits only)
        #[arg(value_parser = parse_quantity)]
        quantity: Option<String>,

        /// Unit: Metre, Adet or Kilo (defaults to the configured default-unit)
        #[arg(short, long)]
        unit: Option<Unit>,
    },

    /// Replace the record at an index
    #[command(alias = "up")]
    Update {
        /// Index of the record as shown by `list`
        index: Option<DisplayIndex>,

        /// New item name
        name: Option<String>,

        /// New quantity (digits only)
        #[arg(value_parser = parse_quantity)]
        quantity: Option<String>,

        /// Unit: Metre, Adet or Kilo (defaults to the configured default-unit)
        #[arg(short, long)]
        unit: Option<Unit>,
    },

    /// Delete the record at an index
    #[command(alias = "rm")]
    Delete {
        /// Index of the record as shown by `list`
        index: Option<DisplayIndex>,
    },

    /// List records
    #[command(alias = "ls")]
    List {
        /// Only show records whose name contains this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search records by name (case-insensitive)
    Search { term: String },

    /// Print the path of the data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, default-unit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data file if it does not exist yet
    Init,
}

/// Quantities are digit strings. Empty is let through so the missing-field
/// warning can report it.
fn parse_quantity(s: &str) -> Result<String, String> {
    if s.chars().all(|c| c.is_ascii_digit()) {
        Ok(s.to_string())
    } else {
        Err(format!("quantity must contain digits only, got '{}'", s))
    }
}
