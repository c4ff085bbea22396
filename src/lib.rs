//! # Timetracker
//!
//! A command-line utility for tracking the minutes spent on tasks,
//! grouped by project.
//!
//! ## Features
//!
//! - **Project Selection**: Pick an existing project from a numbered list or create one inline
//! - **Task Selection**: Pick or create a task under the chosen project
//! - **Interactive Tracking**: A live status line shows elapsed and accumulated minutes
//! - **Local Persistence**: Totals are stored in a SQLite file in the home directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetracker::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
