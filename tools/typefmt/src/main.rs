mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{inspect::InspectArgs, normalize::NormalizeArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "typefmt", about = "Normalize and inspect table-format type descriptors")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of each descriptor
    Normalize(NormalizeArgs),
    /// Describe the type named by a descriptor
    Inspect(InspectArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Normalize(args) => args.run(),
        Commands::Inspect(args) => args.run(),
    }
}
