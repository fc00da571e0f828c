use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use manifest_manager::cli::Cli;
use manifest_manager::tracking::ManifestError;
use manifest_manager::{ManagerContext, commands, logging};
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", format!("{}:", error_label(&e)).red().bold(), e);
        process::exit(1);
    }
}

/// Kind of a manifest failure, or plain "Error" for anything else
fn error_label(e: &anyhow::Error) -> &'static str {
    e.downcast_ref::<ManifestError>()
        .map_or("Error", ManifestError::error_type)
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let ctx = ManagerContext::new(&cli.manifest)?;
    logging::init(&logging::directive_from_env(
        cli.verbose,
        ctx.config.log.level,
    ));

    let operation = cli.operation();
    tracing::debug!(?operation, manifest = %ctx.manifest_path().display(), "running");

    commands::execute(&ctx, &operation, &mut io::stdout().lock())
}
