//! resgen CLI entrypoint
//! Parses command-line arguments and dispatches to the command handlers.
#![deny(unsafe_code)]

mod browser;
mod catalog;
mod commands;
mod config;
mod engine;
mod error;
mod templates;

use std::ffi::OsString;

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

use browser::SystemUrlOpener;
use templates::TemplateRoots;

#[derive(Parser)]
#[command(name = "resgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Manage and inspect templates
    // "templates" is the deprecated spelling; same routing table entry,
    // never a second handler.
    #[command(alias = "templates")]
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
    /// Run a single generator against explicit inputs
    Run(commands::run::RunArgs),
    /// Deprecated flat spellings (`resgen strings ...`), routed to `run`
    #[command(external_subcommand)]
    Legacy(Vec<OsString>),
}

#[derive(clap::Subcommand, Debug)]
enum TemplateCommands {
    /// List available templates, custom and bundled
    List {
        /// Restrict the listing to one generator kind
        #[arg(long)]
        only: Option<String>,
    },
    /// Print the path a template reference resolves to
    Which(commands::template::LocateArgs),
    /// Print the contents of the resolved template
    Cat(commands::template::LocateArgs),
    /// Open the online documentation for templates
    Doc {
        /// Generator kind to document
        kind: Option<String>,
        /// Bundled template to document
        #[arg(requires = "kind")]
        template: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let roots = TemplateRoots::discover();

    match cli.command {
        // No subcommand and no help flag: the implicit configuration-driven
        // generation run, not an error.
        None => {
            debug!("no subcommand, running from configuration");
            commands::run::run_from_config(&roots)?;
        }
        Some(Commands::Template { action }) => match action {
            TemplateCommands::List { only } => {
                print!("{}", commands::template::list(&roots, only.as_deref())?);
            }
            TemplateCommands::Which(args) => {
                print!("{}", commands::template::which(&roots, &args)?);
            }
            TemplateCommands::Cat(args) => {
                print!("{}", commands::template::cat(&roots, &args)?);
            }
            TemplateCommands::Doc { kind, template } => {
                commands::template::doc(
                    &roots,
                    kind.as_deref(),
                    template.as_deref(),
                    &SystemUrlOpener,
                )?;
            }
        },
        Some(Commands::Run(args)) => commands::run::run(&roots, &args)?,
        Some(Commands::Legacy(argv)) => commands::run::run_legacy(&roots, argv)?,
    }
    Ok(())
}
