//! `blogcfg show` and `blogcfg get`.

use super::{Cli, ShowArgs, common};
use anyhow::{Result, bail};
use blogcfg::SiteConfig;

/// Print the resolved configuration as TOML or JSON.
pub fn run_show(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let config = common::load_from(&common::resolve_source(cli))?;
    println!("{}", render(&config, args)?);
    Ok(())
}

/// Print one field; unset optional fields print an empty line.
pub fn run_get(cli: &Cli, field: &str) -> Result<()> {
    let config = common::load_from(&common::resolve_source(cli))?;
    match config.get(field) {
        Some(value) => println!("{value}"),
        None => bail!("unknown field '{field}'"),
    }
    Ok(())
}

fn render(config: &SiteConfig, args: &ShowArgs) -> Result<String> {
    let out = if !args.json {
        config.to_toml()?
    } else if args.pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(out)
}
