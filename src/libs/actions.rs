//! Domain operations with user-visible notifications.
//!
//! Thin wrappers around the repositories that print a creation notice before
//! persisting. The notice-then-persist order is part of the console contract.

use crate::db::db::Db;
use crate::db::projects::Projects;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;

/// Announces and persists a new project.
pub fn create_project(db: &Db, name: &str) -> Result<Project> {
    msg_success!(Message::ProjectCreated(name.to_string()));
    let project = Project::new(name);
    Projects::new(db).insert(&project)?;
    Ok(project)
}

/// Announces and persists a new task under `project`, starting at 0 minutes.
pub fn create_task(db: &Db, project: &Project, name: &str) -> Result<Task> {
    msg_success!(Message::TaskCreated(name.to_string(), project.name.clone()));
    let task = Task::new(&project.name, name);
    Tasks::new(db).insert(&task)?;
    Ok(task)
}

/// Overwrites the task's stored total with `time`.
pub fn update_task(db: &Db, task: &Task, time: i64) -> Result<()> {
    Tasks::new(db).update_time(task, time)
}
