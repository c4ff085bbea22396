//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text. Keeping the wording in
//! one place keeps the console contract reviewable at a glance and leaves
//! the door open for localization later.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === PROJECT MESSAGES ===
            Message::NoProjects => "No projects yet.".to_string(),
            Message::ProjectsHeader => "Projects:".to_string(),
            Message::ProjectCreated(name) => format!("Created project '{}'", name),
            Message::InvalidProjectChoice => "Neither a project number nor a usable project name.".to_string(),

            // === TASK MESSAGES ===
            Message::NoTasks(project) => format!("No tasks in '{}' yet.", project),
            Message::TasksHeader(project) => format!("Tasks in '{}':", project),
            Message::TaskCreated(task, project) => format!("Created task '{}' in project '{}'", task, project),
            Message::InvalidTaskChoice => "Neither a task number nor a usable task name.".to_string(),

            // === TRACKING MESSAGES ===
            Message::TrackingStarted(project, task, at) => {
                format!("Tracking {}/{} since {}. Press Enter to stop.", project, task, at)
            }
            Message::TrackingStatus(project, task, elapsed, total) => {
                format!("Working on {}/{} for {} minutes ({} minutes total)", project, task, elapsed, total)
            }
            Message::TrackingSaved(elapsed, total) => {
                format!("Worked {} minutes this session, {} minutes total saved", elapsed, total)
            }

            // === PROMPTS ===
            Message::PromptNewProject => "Enter a name for your first project".to_string(),
            Message::PromptProjectChoice => "Project number or new project name".to_string(),
            Message::PromptNewTask => "Enter a new task name".to_string(),
            Message::PromptTaskChoice => "Task number or new task name".to_string(),
        };
        write!(f, "{}", text)
    }
}
