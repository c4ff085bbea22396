use crate::db::db::Db;
use crate::libs::project::Project;
use anyhow::Result;
use rusqlite::{params, Connection};

const INSERT_PROJECT: &str = "INSERT INTO project (name) VALUES (?1)";
const SELECT_PROJECTS: &str = "SELECT name FROM project";

/// Repository for `project` rows.
pub struct Projects<'a> {
    conn: &'a Connection,
}

impl<'a> Projects<'a> {
    pub fn new(db: &'a Db) -> Self {
        Projects { conn: &db.conn }
    }

    /// Inserts a new project. A duplicate name violates the primary key and
    /// the constraint error propagates to the caller.
    pub fn insert(&self, project: &Project) -> Result<()> {
        self.conn.execute(INSERT_PROJECT, params![project.name])?;
        Ok(())
    }

    /// Returns all projects in natural storage order.
    pub fn fetch(&self) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(SELECT_PROJECTS)?;
        let project_iter = stmt.query_map([], |row| Ok(Project { name: row.get(0)? }))?;
        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }
        Ok(projects)
    }
}
