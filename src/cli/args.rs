//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// In-memory forest of attributed items: lookup, traversal, row projection
#[derive(Parser, Debug)]
#[command(name = "treestore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Load items from a JSON array file instead of the built-in sample forest
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all items as JSON lines, in insertion order
    Items,

    /// Show the forest as a tree
    Tree,

    /// Direct children of an item
    Children {
        /// Item identifier (numeric tokens are integer ids)
        id: String,
        /// Include all descendants, pre-order
        #[arg(short, long)]
        all: bool,
    },

    /// Ancestor chain from an item to its root
    Parents {
        /// Item identifier (numeric tokens are integer ids)
        id: String,
    },

    /// Path-annotated rows for display grids
    Rows {
        /// Emit rows as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
