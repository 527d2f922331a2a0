//! Core library modules for studydesk.
//!
//! ## Layout
//!
//! - **Model**: [`task`] defines tasks, their types and priorities
//! - **Derivations**: [`clock`], [`agenda`], [`progress`] and [`dashboard`]
//!   compute everything shown on screen from a task snapshot and a `now`
//! - **Presentation**: [`selection`], [`formatter`], [`view`] and [`messages`]
//! - **Infrastructure**: [`config`] and [`data_storage`]
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use studydesk::libs::dashboard::Dashboard;
//! use studydesk::libs::selection::{Selection, ViewKind};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let dashboard = Dashboard::build(&[], &Selection::new(ViewKind::Dashboard), now);
//! assert_eq!(dashboard.heading, "Monday, January 15, 2024");
//! assert!(dashboard.empty_state.is_some());
//! ```

pub mod agenda;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod progress;
pub mod selection;
pub mod task;
pub mod view;
