use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::libs::task::Task;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

/// Renders the numbered selection lists.
///
/// The `#` column carries the 1-based index the user types to pick an entry.
pub struct View {}

impl View {
    pub fn projects(projects: &[Project]) -> Result<()> {
        msg_print!(Message::ProjectsHeader);
        let mut table = Table::new();

        table.add_row(row!["#", "PROJECT"]);
        for (index, project) in projects.iter().enumerate() {
            table.add_row(row![index + 1, project.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(project: &Project, tasks: &[Task]) -> Result<()> {
        msg_print!(Message::TasksHeader(project.name.clone()));
        let mut table = Table::new();

        table.add_row(row!["#", "TASK", "MINUTES"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![index + 1, task.name, task.time]);
        }
        table.printstd();

        Ok(())
    }
}
