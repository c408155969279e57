/// Every line of text the application shows to the user.
///
/// The wording lives in `display.rs`; call sites only pick a variant and
/// hand it to one of the `msg_*!` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),       // id
    TaskUpdated(String),     // id
    TaskCompleted(String),   // id
    TaskIncompleted(String), // id
    TaskDeleted(String),     // id
    TaskNotFound(String),    // id
    NoTasksFound,
    TasksHeader,
    CompletedTasksHeader,
    PendingTasksHeader,

    // === TASK STATUS LABELS ===
    StatusDone,
    StatusPending,

    // === SESSION MESSAGES ===
    SessionBanner {
        app_name: String,
        version: String,
        tagline: String,
    },
    SessionCommands,
    SessionGoodbye,
    SessionInterrupted,
    SessionUnbalancedQuotes,
    SessionInputFailed(String), // error message
}
