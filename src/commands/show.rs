use super::open_tasks;
use crate::{
    db::theme,
    libs::{
        clock::local_now,
        config::Config,
        dashboard::Dashboard,
        selection::{Selection, ViewKind},
        view::View,
    },
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// dashboard, pending, subjects or completed (default from configuration)
    #[arg(short, long)]
    view: Option<String>,

    /// Only tasks of this subject; implies the subjects view
    #[arg(short, long)]
    subject: Option<String>,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let config = Config::read()?;
    let display = config.display();
    let now = local_now();
    let tasks = open_tasks(&config, now.with_timezone(&Utc))?;

    let view = match (&args.view, &args.subject) {
        (Some(name), _) => ViewKind::parse(name),
        (None, Some(_)) => ViewKind::Subjects,
        (None, None) => display.default_view,
    };
    let mut selection = Selection::new(view);
    if let Some(subject) = &args.subject {
        selection.select_subject(subject);
    }

    let dashboard = Dashboard::build(tasks.all(), &selection, now.naive_local());
    let theme = theme::resolve(tasks.storage(), display.theme)?;
    View::dashboard(&dashboard, theme);

    Ok(())
}
