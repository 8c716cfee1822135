/// vend - vendor third-party source trees
///
/// Snapshots a subfolder of an upstream repository into the local tree and
/// optionally drives the upstream's native configure/compile/install build.
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vend")]
#[command(version = vend::VERSION_DISPLAY)]
#[command(about = "Vendor third-party source trees and drive their native builds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Fetch(commands::fetch::Args),
    Build(commands::build::Args),
    Sync(commands::sync::Args),
    Completions(commands::completions::Args),
}

fn main() {
    let cli = Cli::parse();

    let result: Result<()> = match cli.command {
        Commands::Fetch(args) => commands::fetch::run(args),
        Commands::Build(args) => commands::build::run(args),
        Commands::Sync(args) => commands::sync::run(args),
        Commands::Completions(args) => commands::completions::run(args, &mut Cli::command()),
    };

    if let Err(e) = result {
        // Errors reach the console once, here, and set the process exit
        // code so scripts can detect failure without parsing text.
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
