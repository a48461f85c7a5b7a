//! Command-line driver: builds a sample tree, prints it, and checks that it is still a valid BST.

use anyhow::Result;
use arena_bst::{Config, Duplicates, Tree};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build an unbalanced binary search tree and inspect it",
    long_about = None
)]
struct Cli {
    /// Keys to insert, in order. Each key is stored as its own value.
    #[arg(allow_negative_numbers = true, default_values_t = [3, 1, 4, 6, 9, 2, 5, 7])]
    keys: Vec<i64>,

    /// Key to remove once every key has been inserted. May be repeated.
    #[arg(short, long, value_name = "KEY", allow_negative_numbers = true)]
    remove: Vec<i64>,

    /// Overwrite the value of an existing key instead of adding a second node.
    #[arg(long, env = "ARENA_BST_REPLACE_DUPLICATES")]
    replace_duplicates: bool,

    /// Enable debug logging for tree operations. Default is WARN level.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Installs the global subscriber. `--quiet` always wins, then `RUST_LOG`, then `--verbose`.
fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::try_from_default_env()?
    } else if verbose {
        EnvFilter::new("arena_bst=debug,info")
    } else {
        EnvFilter::new("arena_bst=warn,error")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(!quiet)
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    let duplicates = if cli.replace_duplicates {
        Duplicates::Replace
    } else {
        Duplicates::KeepBoth
    };
    let mut tree = Tree::with_config(Config::default().duplicates(duplicates));
    for &key in &cli.keys {
        tree.insert(key, key);
    }
    info!(inserted = cli.keys.len(), nodes = tree.len(), "built tree");

    for &key in &cli.remove {
        match tree.remove(&key) {
            Ok(value) => info!(key, value, "removed"),
            Err(err) => warn!(key, "could not remove: {err}"),
        }
    }

    println!("{tree:#?}");
    println!("height: {}", tree.height());
    let keys: Vec<_> = tree.iter().map(|(key, _)| key).collect();
    println!("in order: {keys:?}");
    match tree.nth_largest(2) {
        Some((key, _)) => println!("third largest: {key}"),
        None => println!("third largest: none"),
    }
    println!("is BST: {}", tree.is_bst());

    Ok(())
}
