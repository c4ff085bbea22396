//! Database layer built on SQLite.
//!
//! A single connection is opened per process by [`db::Db`] and lent to the
//! repository structs in [`projects`] and [`tasks`]. The schema is created
//! idempotently on every startup.

pub mod db;
pub mod projects;
pub mod tasks;
