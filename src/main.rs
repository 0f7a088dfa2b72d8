//! rnkit command-line tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{InitCommand, ListCommand};
use rnkit_lib::TemplateRegistry;

#[derive(Parser)]
#[command(name = "rnkit")]
#[command(version)]
#[command(about = "Scaffold React Native projects from remote templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project from a template
    Init {
        /// Project name
        project: String,
        /// Template identifier (see `rnkit list`)
        #[arg(long, default_value = "default")]
        template: String,
    },
    /// View the list of available templates
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = TemplateRegistry::builtin();

    match cli.command {
        Commands::Init { project, template } => {
            let cmd = InitCommand::new(project, template)?;
            cmd.execute(&registry)?;
        }
        Commands::List => {
            ListCommand::execute(&registry);
        }
    }

    Ok(())
}
