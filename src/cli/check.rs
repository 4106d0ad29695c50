//! `blogcfg check`: load, validate, report.

use super::{Cli, common};
use anyhow::Result;
use blogcfg::{init_config, log};

/// Validate the configuration and install it as the process-wide value.
///
/// Errors abort with the rendered diagnostics; warnings are printed and
/// do not fail the check.
pub fn run_check(cli: &Cli) -> Result<()> {
    let source = common::resolve_source(cli);
    let config = init_config(common::load_from(&source)?)?;

    log!("ok"; "{} is valid ({})", source, config.site_url);
    if config.subscribe_form().is_some() {
        log!("check"; "subscribe form enabled");
    }
    Ok(())
}
