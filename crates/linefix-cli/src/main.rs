// crates/linefix-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "linefix-cli")]
#[command(about = "Line-oriented literal patcher for malformed CSV exports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite a file line by line with a rule set (preset or .toml)
    Rewrite(cmd::rewrite::RewriteArgs),

    /// Rule set tools (inspect, export)
    Rules(cmd::rules::RulesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Rewrite(args) => cmd::rewrite::run(args),
        Commands::Rules(args) => cmd::rules::run(args),
    }
}
