//! Blogcfg - scaffold, check and print a blog's site configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    blogcfg::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry } => cli::init::new_config(&cli, dir.as_deref(), *dry),
        Commands::Check => cli::check::run_check(&cli),
        Commands::Show { args } => cli::show::run_show(&cli, args),
        Commands::Get { field } => cli::show::run_get(&cli, field),
    }
}
