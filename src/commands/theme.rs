use crate::{
    db::{storage::SqliteStorage, theme, theme::Theme},
    libs::{config::Config, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// dark, light or toggle; prints the current theme when omitted
    #[arg(value_parser = ["dark", "light", "toggle"])]
    action: Option<String>,
}

pub fn cmd(args: ThemeArgs) -> Result<()> {
    let fallback = Config::read()?.display().theme;
    let mut storage = SqliteStorage::new()?;

    let changed = match args.action.as_deref() {
        None => {
            let current = theme::resolve(&storage, fallback)?;
            msg_print!(Message::ThemeCurrent(current.to_string()));
            return Ok(());
        }
        Some("toggle") => theme::toggle(&mut storage, fallback)?,
        Some(name) => {
            let selected: Theme = name.parse().map_err(anyhow::Error::msg)?;
            theme::save(&mut storage, selected)?;
            selected
        }
    };

    msg_success!(Message::ThemeChanged(changed.to_string()));
    Ok(())
}
