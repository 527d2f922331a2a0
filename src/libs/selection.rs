//! Which view is active, and which subject is picked in the subjects view.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Pending tasks due within the next 24 hours, overdue included.
    #[default]
    Dashboard,
    /// Every pending task.
    Pending,
    /// Pending tasks, narrowed to the selected subject when there is one.
    Subjects,
    /// Completed history; the task list itself still shows pending tasks.
    Completed,
    /// A view name nothing recognises. Behaves like [`ViewKind::Pending`].
    Unknown(String),
}

impl ViewKind {
    pub const KNOWN: [&'static str; 4] = ["dashboard", "pending", "subjects", "completed"];

    /// Maps a view name to its kind. Unrecognised names are kept as [`ViewKind::Unknown`].
    pub fn parse(name: &str) -> ViewKind {
        match name.trim().to_ascii_lowercase().as_str() {
            "dashboard" => ViewKind::Dashboard,
            "pending" => ViewKind::Pending,
            "subjects" => ViewKind::Subjects,
            "completed" => ViewKind::Completed,
            _ => ViewKind::Unknown(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ViewKind::Dashboard => "dashboard",
            ViewKind::Pending => "pending",
            ViewKind::Subjects => "subjects",
            ViewKind::Completed => "completed",
            ViewKind::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ViewKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ViewKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ViewKind::parse(&name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current_view: ViewKind,
    selected_subject: Option<String>,
}

impl Selection {
    pub fn new(view: ViewKind) -> Self {
        Selection {
            current_view: view,
            selected_subject: None,
        }
    }

    pub fn current_view(&self) -> &ViewKind {
        &self.current_view
    }

    pub fn selected_subject(&self) -> Option<&str> {
        self.selected_subject.as_deref()
    }

    /// Changes the view and always forgets the selected subject.
    pub fn switch_view(&mut self, view: ViewKind) {
        self.current_view = view;
        self.selected_subject = None;
    }

    /// Picks a subject without changing the view; only the subjects view filters on it.
    pub fn select_subject(&mut self, subject: &str) {
        self.selected_subject = Some(subject.to_string());
    }
}
