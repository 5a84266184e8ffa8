// flowprops/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use flowprops::generate;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "flowprops")]
#[command(about = "Generate job-submission .properties files from a JSON manifest", long_about = None)]
#[command(version = env!("FLOWPROPS_CLI_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .properties files from a manifest
    Generate {
        /// Path to the JSON manifest
        #[arg(short, long, value_name = "FILE")]
        manifest: PathBuf,

        /// Existing directory to write the .properties files into
        #[arg(short, long, value_name = "DIR")]
        output_dir: PathBuf,
    },
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            manifest,
            output_dir,
        } => generate(&manifest, &output_dir),
    }
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
