use crate::db::db::Db;
use crate::libs::project::Project;
use crate::libs::task::Task;
use anyhow::Result;
use rusqlite::{params, Connection};

const INSERT_TASK: &str = "INSERT INTO task (project, name) VALUES (?1, ?2)";
const SELECT_TASKS: &str = "SELECT project, name, time FROM task WHERE project = ?1";
const UPDATE_TIME: &str = "UPDATE task SET time = ?1 WHERE project = ?2 AND name = ?3";

/// Repository for `task` rows.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Tasks { conn: &db.conn }
    }

    /// Inserts a new task. The `time` column takes its schema default of 0.
    /// Duplicate (project, name) pairs and references to a missing project
    /// are constraint errors that propagate to the caller.
    pub fn insert(&self, task: &Task) -> Result<()> {
        self.conn.execute(INSERT_TASK, params![task.project, task.name])?;
        Ok(())
    }

    /// Returns all tasks belonging to the given project.
    pub fn fetch(&self, project: &Project) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map(params![project.name], |row| {
            Ok(Task {
                project: row.get(0)?,
                name: row.get(1)?,
                time: row.get(2)?,
            })
        })?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Overwrites the accumulated minutes for the task's (project, name) row.
    /// A row that no longer exists simply affects zero rows.
    pub fn update_time(&self, task: &Task, time: i64) -> Result<()> {
        self.conn.execute(UPDATE_TIME, params![time, task.project, task.name])?;
        Ok(())
    }
}
