/// Every user-facing string in the application.
///
/// Variants carry the values interpolated into their text; the text itself
/// lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),          // id
    TaskUpdated(String),          // title
    TaskCompleted(String),        // title
    TaskAlreadyCompleted(String), // title
    TaskDeleted(String),          // id
    TaskNotFound(String),         // id
    InvalidTaskInput(String),     // reason
    TasksPurged(usize),
    TasksSkipped(usize),
    TaskNotEditable(String), // title
    StorageRecovered,

    // === DASHBOARD MESSAGES ===
    PendingSummary(usize),
    AllCaughtUp,
    OverallProgress(u32),
    CompletedHeader(usize),
    WeekHeader,
    WeekTotal(usize),
    ProgressHeader,
    SubjectsHeader,
    NoSubjects,
    EmptyDashboardTitle,
    EmptyDashboardMessage,
    EmptyPendingTitle,
    EmptyPendingMessage,
    EmptySubjectsTitle,
    EmptySubjectsMessage,

    // === THEME MESSAGES ===
    ThemeCurrent(String),
    ThemeChanged(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTasks,
    ConfigModuleDisplay,

    // === PROMPTS ===
    PromptSelectModules,
    PromptRetentionDays,
    PromptDefaultPriority,
    PromptDefaultView,
    PromptTheme,
    PromptConfirmDelete,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
