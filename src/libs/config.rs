//! Configuration management for studydesk.
//!
//! Settings live in `config.json` next to the database, in the per-user data
//! directory (see [`DataStorage`]). Every section is optional; a missing
//! section means "use the defaults", so a fresh install runs with no file at
//! all.
//!
//! ## Sections
//!
//! - **tasks**: retention window for completed tasks, default priority for new ones
//! - **display**: view opened by `show`, theme used until one is saved
//!
//! ```json
//! {
//!   "tasks": { "retention_days": 7, "default_priority": "medium" },
//!   "display": { "default_view": "dashboard", "theme": "light" }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studydesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Keeping completed tasks for {} days", config.tasks().retention_days);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::tasks::RETENTION_DAYS;
use crate::db::theme::Theme;
use crate::libs::messages::Message;
use crate::libs::selection::ViewKind;
use crate::libs::task::Priority;
use crate::msg_print;
use anyhow::Result;
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Task store settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TasksConfig {
    /// Days a completed task is kept before the load-time sweep removes it.
    pub retention_days: u32,

    /// Priority preselected for new tasks when none is given.
    pub default_priority: Priority,
}

/// Presentation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// View rendered by `show` when no `--view` is passed.
    pub default_view: ViewKind,

    /// Theme used while the theme slot is empty.
    pub theme: Theme,
}

/// Main configuration container.
///
/// Unconfigured sections are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TasksConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            retention_days: RETENTION_DAYS as u32,
            default_priority: Priority::Medium,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            default_view: ViewKind::Dashboard,
            theme: Theme::Light,
        }
    }
}

impl TasksConfig {
    pub fn retention(&self) -> Duration {
        Duration::days(i64::from(self.retention_days))
    }
}

impl Config {
    /// Reads `config.json` from the data directory, or the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes `config.json` to the data directory as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective task settings.
    pub fn tasks(&self) -> TasksConfig {
        self.tasks.clone().unwrap_or_default()
    }

    /// Effective display settings.
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the current configuration.
    ///
    /// The user picks which sections to configure; each picked section is
    /// prompted field by field with the current values as defaults.
    pub fn init() -> Result<Self> {
        // Fall back to defaults if the existing file is unreadable
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "tasks".to_string(),
                name: "Tasks".to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: "Display".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "tasks" => {
                    let default = config.tasks();
                    msg_print!(Message::ConfigModuleTasks);

                    let retention_days = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptRetentionDays.to_string())
                        .default(default.retention_days)
                        .interact_text()?;

                    let priorities: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
                    let current = Priority::ALL
                        .iter()
                        .position(|p| *p == default.default_priority)
                        .unwrap_or(1);
                    let priority = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPriority.to_string())
                        .items(&priorities)
                        .default(current)
                        .interact()?;

                    config.tasks = Some(TasksConfig {
                        retention_days,
                        default_priority: Priority::ALL[priority],
                    });
                }
                "display" => {
                    let default = config.display();
                    msg_print!(Message::ConfigModuleDisplay);

                    let current_view = ViewKind::KNOWN
                        .iter()
                        .position(|name| *name == default.default_view.as_str())
                        .unwrap_or(0);
                    let view = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultView.to_string())
                        .items(&ViewKind::KNOWN)
                        .default(current_view)
                        .interact()?;

                    let themes = [Theme::Light, Theme::Dark];
                    let current_theme = themes.iter().position(|t| *t == default.theme).unwrap_or(0);
                    let theme = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTheme.to_string())
                        .items(&themes.iter().map(|t| t.as_str()).collect::<Vec<_>>())
                        .default(current_theme)
                        .interact()?;

                    config.display = Some(DisplayConfig {
                        default_view: ViewKind::parse(ViewKind::KNOWN[view]),
                        theme: themes[theme],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
