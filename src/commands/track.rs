//! The interactive session: pick or create a project, pick or create a task,
//! then track time on it until stopped.
//!
//! Every prompt accepts either a number from the displayed list or a brand
//! new name. Input that is neither prints an error and ends the session
//! normally; nothing is re-prompted.

use crate::db::db::Db;
use crate::db::projects::Projects;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::libs::task::Task;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::libs::{actions, input};
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

pub async fn cmd() -> Result<()> {
    let db = Db::new()?;

    let (project, created_now) = match resolve_project(&db)? {
        Some(resolved) => resolved,
        None => return Ok(()),
    };

    // A project created this session has no tasks to offer.
    let task = if created_now {
        match new_task(&db, &project)? {
            Some(task) => task,
            None => return Ok(()),
        }
    } else {
        match resolve_task(&db, &project)? {
            Some(task) => task,
            None => return Ok(()),
        }
    };

    Tracker::new(task).run(&db).await
}

/// Lets the user pick an existing project or create a new one. The bool is
/// true when the project was created just now. `None` means the input was
/// unusable and an error was already printed.
fn resolve_project(db: &Db) -> Result<Option<(Project, bool)>> {
    let projects = Projects::new(db).fetch()?;

    if projects.is_empty() {
        msg_print!(Message::NoProjects);
        let name = prompt(Message::PromptNewProject)?;
        return match input::valid_name(&name) {
            Some(name) => Ok(Some((actions::create_project(db, name)?, true))),
            None => {
                msg_error!(Message::InvalidProjectChoice);
                Ok(None)
            }
        };
    }

    View::projects(&projects)?;
    let choice = prompt(Message::PromptProjectChoice)?;
    if let Some(project) = input::valid_choice(&projects, &choice) {
        return Ok(Some((project.clone(), false)));
    }
    match input::valid_name(&choice) {
        Some(name) => Ok(Some((actions::create_project(db, name)?, true))),
        None => {
            msg_error!(Message::InvalidProjectChoice);
            Ok(None)
        }
    }
}

/// Lets the user pick an existing task of `project` or create a new one.
fn resolve_task(db: &Db, project: &Project) -> Result<Option<Task>> {
    let tasks = Tasks::new(db).fetch(project)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasks(project.name.clone()));
        return new_task(db, project);
    }

    View::tasks(project, &tasks)?;
    let choice = prompt(Message::PromptTaskChoice)?;
    if let Some(task) = input::valid_choice(&tasks, &choice) {
        return Ok(Some(task.clone()));
    }
    match input::valid_name(&choice) {
        Some(name) => Ok(Some(actions::create_task(db, project, name)?)),
        None => {
            msg_error!(Message::InvalidTaskChoice);
            Ok(None)
        }
    }
}

/// Prompts for a fresh task name under `project`.
fn new_task(db: &Db, project: &Project) -> Result<Option<Task>> {
    let name = prompt(Message::PromptNewTask)?;
    match input::valid_name(&name) {
        Some(name) => Ok(Some(actions::create_task(db, project, name)?)),
        None => {
            msg_error!(Message::InvalidTaskChoice);
            Ok(None)
        }
    }
}

/// Reads one line of input; empty lines pass through to name validation.
fn prompt(message: Message) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .allow_empty(true)
        .interact_text()?)
}
