use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ripple_platform::{Host, run_script, run_terminal_app};
use state_demo::{DemoConfig, app};

#[derive(Parser)]
#[command(name = "state-demo")]
#[command(about = "Parent-to-child state next to a shared atom", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated commands to run instead of reading stdin (e.g. "click 3,click 9")
    #[arg(short, long, value_delimiter = ',')]
    script: Vec<String>,

    /// Show the inspector line under every frame
    #[arg(long)]
    inspector: bool,

    /// Number of independent local-state owners to mount
    #[arg(long)]
    local_owners: Option<usize>,

    /// Truncate rows to this width (0 = no truncation)
    #[arg(long)]
    columns: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(n) = cli.local_owners {
        config.local_owners = n;
    }
    if let Some(columns) = cli.columns {
        config.host.columns = columns;
    }
    config.host.inspector |= cli.inspector;
    log::debug!("config: {config:?}");

    let root = app(config.local_owners);
    if cli.script.is_empty() {
        return run_terminal_app(root, config.host);
    }

    let mut host = Host::new(root, config.host);
    let mut out = std::io::stdout().lock();
    run_script(&mut host, &cli.script, &mut out).context("running script")?;
    Ok(())
}
