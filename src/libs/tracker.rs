//! Interactive tracking session.
//!
//! The session runs until a line arrives on stdin. While it runs, a spawned
//! timer task rewrites a single status line once per minute. The timer and
//! the foreground share only the immutable start instant and stdout; the
//! timer is stopped through a oneshot channel, never through shared counters.

use crate::db::db::Db;
use crate::libs::actions;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use std::io::{self, Write};
use tokio::sync::oneshot;
use tokio::time::{self, Duration, Instant};

/// Period between status line refreshes.
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Converts elapsed wall time to whole minutes.
///
/// Ties at half a minute round away from zero (`f64::round`); this is the
/// one rounding rule used everywhere elapsed time becomes minutes.
pub fn elapsed_minutes(elapsed: Duration) -> i64 {
    (elapsed.as_secs_f64() / 60.0).round() as i64
}

pub struct Tracker {
    task: Task,
    start: Instant,
}

impl Tracker {
    /// Starts the session clock immediately.
    pub fn new(task: Task) -> Self {
        Tracker {
            task,
            start: Instant::now(),
        }
    }

    /// Runs the session until a line (any content, including empty) arrives
    /// on stdin, then persists the new cumulative total for the task.
    pub async fn run(self, db: &Db) -> Result<()> {
        msg_print!(
            Message::TrackingStarted(
                self.task.project.clone(),
                self.task.name.clone(),
                Local::now().format("%H:%M").to_string()
            ),
            true
        );
        print_status(&self.task, 0);

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let status_task = self.task.clone();
        let start = self.start;
        let ticker = tokio::spawn(async move {
            let mut ticks = time::interval_at(start + TICK_INTERVAL, TICK_INTERVAL);
            loop {
                tokio::select! {
                    _ = ticks.tick() => print_status(&status_task, elapsed_minutes(start.elapsed())),
                    _ = &mut stop_rx => break,
                }
            }
        });

        // The blocking read is the sole stop signal; there is no timeout.
        tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            io::stdin().read_line(&mut line)
        })
        .await??;

        let _ = stop_tx.send(());
        ticker.await?;

        // Recomputed from the stop instant, not the last tick, so the saved
        // total can differ from the last printed status line.
        let minutes = elapsed_minutes(self.start.elapsed());
        let total = minutes + self.task.time;
        println!();
        msg_success!(Message::TrackingSaved(minutes, total));
        actions::update_task(db, &self.task, total)?;

        Ok(())
    }
}

/// Rewrites the status line in place.
fn print_status(task: &Task, minutes: i64) {
    print!(
        "\r{}",
        Message::TrackingStatus(task.project.clone(), task.name.clone(), minutes, minutes + task.time)
    );
    let _ = io::stdout().flush();
}
