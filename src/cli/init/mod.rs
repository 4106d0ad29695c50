//! `blogcfg init`: write a starter config file.
//!
//! - [`validate`]: target checks (never overwrite an existing config)
//! - [`config`]: config file generation

mod config;
mod validate;

use super::Cli;
use anyhow::Result;
use blogcfg::log;
use std::path::Path;

/// Write a config file into `dir` (or cwd).
///
/// With `--builtin` the file holds the built-in site values; otherwise it is
/// the commented template. `dry_run` prints instead of writing.
pub fn new_config(cli: &Cli, dir: Option<&Path>, dry_run: bool) -> Result<()> {
    let content = config::generate_config(cli.builtin)?;
    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let path = root.join(&cli.config);

    validate::validate_target(&path)?;
    config::write_config(&path, &content)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
