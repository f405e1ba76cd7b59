//! Command dispatch: thin glue between clap arguments and the store.

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{forest_to_trees, project_rows};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{NodeId, TreeItem, TreeStore};
use crate::sample;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Items) => items(cli),
        Some(Commands::Tree) => tree(cli),
        Some(Commands::Children { id, all }) => children(cli, id, *all),
        Some(Commands::Parents { id }) => parents(cli, id),
        Some(Commands::Rows { json }) => rows(cli, *json),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "treestore", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Load the item source: an explicit JSON file (validated strictly, it is
/// untrusted input) or the built-in sample forest.
#[instrument(level = "debug", skip(cli))]
fn load_store(cli: &Cli) -> CliResult<TreeStore> {
    match &cli.file {
        Some(path) => {
            let items = read_items(path)?;
            debug!("loaded {} items from {}", items.len(), path.display());
            Ok(TreeStore::validated(items)?)
        }
        None => Ok(TreeStore::new(sample::items())),
    }
}

fn read_items(path: &Path) -> CliResult<Vec<TreeItem>> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Identifiers on the command line: numeric tokens are integer ids,
/// everything else is a string id.
fn parse_node_id(raw: &str) -> NodeId {
    raw.parse::<i64>()
        .map(NodeId::Int)
        .unwrap_or_else(|_| NodeId::Str(raw.to_string()))
}

#[instrument(level = "debug", skip(cli))]
fn items(cli: &Cli) -> CliResult<()> {
    let store = load_store(cli)?;
    print_items(store.get_all().iter())
}

#[instrument(level = "debug", skip(cli))]
fn tree(cli: &Cli) -> CliResult<()> {
    let store = load_store(cli)?;
    for tree in forest_to_trees(&store) {
        output::info(&tree);
    }
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn children(cli: &Cli, raw_id: &str, all: bool) -> CliResult<()> {
    let store = load_store(cli)?;
    let id = parse_node_id(raw_id);
    let found = if all {
        store.get_all_children(&id)
    } else {
        store.get_children(&id)
    };
    print_items(found.into_iter())
}

#[instrument(level = "debug", skip(cli))]
fn parents(cli: &Cli, raw_id: &str) -> CliResult<()> {
    let store = load_store(cli)?;
    let id = parse_node_id(raw_id);
    print_items(store.get_all_parents(&id).into_iter())
}

#[instrument(level = "debug", skip(cli))]
fn rows(cli: &Cli, json: bool) -> CliResult<()> {
    let store = load_store(cli)?;
    let rows = project_rows(&store);

    if json {
        output::info(&serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in rows {
        let path = row.path.iter().join("/");
        let label = row.item.label().unwrap_or_default();
        output::info(&format!("{:<30} {:<5} {}", path, row.category, label));
    }
    Ok(())
}

fn print_items<'a>(items: impl Iterator<Item = &'a TreeItem>) -> CliResult<()> {
    for item in items {
        output::info(&serde_json::to_string(item)?);
    }
    Ok(())
}
