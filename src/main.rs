//! Headless walkthrough of the recursive navigation chain: push to the
//! ceiling, tap the counter, pop back to the root.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use navchain::config::Config;
use navchain::nav::{NavState, PushPolicy};
use navchain::node::NodeController;

#[derive(Parser)]
#[command(name = "navchain", about = "Recursive push-navigation walkthrough")]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured recursion ceiling.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Override the configured push policy (depth_bound or global_budget).
    #[arg(long)]
    policy: Option<PushPolicy>,

    /// Record every push in the navigation stack.
    #[arg(long)]
    track_stack: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(max_depth) = cli.max_depth {
        config.navigation.max_depth = max_depth;
    }
    if let Some(policy) = cli.policy {
        config.navigation.policy = policy;
    }
    if cli.track_stack {
        config.navigation.track_stack = true;
    }
    config.validate()?;

    run_walkthrough(&config);
    Ok(())
}

fn run_walkthrough(config: &Config) {
    let nav = NavState::from_config(config);
    let policy = config.navigation.policy;
    tracing::info!(max_depth = nav.max_depth(), %policy, "Starting walkthrough");

    let mut root = NodeController::root(nav.clone(), policy);
    root.on_mount();
    tracing::info!(active = %nav.describe(), "Mounted root");

    let mut chain = vec![root];

    // Push until the policy says stop.
    loop {
        let Some(mut child) = chain.last_mut().and_then(|parent| parent.push_child()) else {
            break;
        };
        child.on_mount();
        tracing::info!(depth = child.depth(), active = %nav.describe(), "Mounted child");
        chain.push(child);
    }

    if let Some(deepest) = chain.last_mut() {
        deepest.increment_counter();
        deepest.increment_counter();
        tracing::info!(
            depth = deepest.depth(),
            counter = deepest.counter(),
            total = nav.total_active(),
            "End of the chain"
        );
    }

    // Pop back to the root, deepest node first.
    while chain.len() > 1 {
        if let Some(mut node) = chain.pop() {
            node.pop_current();
            node.on_unmount();
        }
        if let Some(parent) = chain.last_mut() {
            parent.reconcile_child();
        }
        tracing::info!(active = %nav.describe(), "Popped");
    }

    if let Some(stack) = nav.nav_stack() {
        tracing::info!(?stack, "Push history");
    }
    tracing::info!(active = %nav.describe(), total = nav.total_active(), "Back at root");
}
