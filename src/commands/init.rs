//! Configuration initialization command.
//!
//! Runs the interactive wizard that writes `config.json`: how long
//! completed tasks are kept, the default priority, the view `show` opens
//! with and the fallback theme.

use crate::{
    libs::{
        config::{Config, DisplayConfig, TasksConfig},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    ///
    /// Overwrites any existing `config.json` with the built-in defaults.
    #[arg(short, long)]
    defaults: bool,
}

/// Executes the initialization command.
///
/// # Returns
///
/// Returns `Ok(())` once the configuration is saved, or an error if a prompt
/// or the file write fails.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults {
        Config {
            tasks: Some(TasksConfig::default()),
            display: Some(DisplayConfig::default()),
        }
    } else {
        Config::init()?
    };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
