mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "snarkcall", about = "Verifier-contract patching and calldata inspection")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Bump the pragma and rename the generated verifier contracts
    Bump {
        /// Directory holding the generated .sol verifiers
        #[arg(long, default_value = "contracts")]
        dir: PathBuf,
    },
    /// Parse exported calldata and print the verifier arguments as JSON
    Calldata {
        /// Calldata string, or a file path with --file
        source: String,
        /// Proof scheme: groth16 or plonk
        #[arg(long, default_value = "groth16")]
        scheme: String,
        /// Treat SOURCE as a file path
        #[arg(long)]
        file: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Bump { dir } => commands::bump::run(&dir)?,
        Cmd::Calldata { source, scheme, file } => commands::calldata::run(&source, &scheme, file)?,
    }
    Ok(())
}
