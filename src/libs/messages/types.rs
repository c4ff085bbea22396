/// Every user-facing message in the application.
///
/// The text itself lives in the `Display` impl in `display.rs`; call sites
/// only name the message and supply its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === PROJECT MESSAGES ===
    NoProjects,
    ProjectsHeader,
    ProjectCreated(String),
    InvalidProjectChoice,

    // === TASK MESSAGES ===
    NoTasks(String),
    TasksHeader(String),
    TaskCreated(String, String), // task name, project name
    InvalidTaskChoice,

    // === TRACKING MESSAGES ===
    TrackingStarted(String, String, String), // project, task, start time
    TrackingStatus(String, String, i64, i64), // project, task, elapsed, total
    TrackingSaved(i64, i64),                 // elapsed, total

    // === PROMPTS ===
    PromptNewProject,
    PromptProjectChoice,
    PromptNewTask,
    PromptTaskChoice,
}
