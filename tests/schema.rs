#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timetracker::db::db::Db;
    use timetracker::db::projects::Projects;
    use timetracker::db::tasks::Tasks;
    use timetracker::libs::project::Project;
    use timetracker::libs::task::Task;

    // Setup mutates process-wide HOME/USERPROFILE, so tests in this binary
    // must not interleave; the guard lives in the context until teardown.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SchemaTestContext {
        _temp_dir: TempDir,
        _env_guard: MutexGuard<'static, ()>,
    }

    impl TestContext for SchemaTestContext {
        fn setup() -> Self {
            let env_guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            SchemaTestContext {
                _temp_dir: temp_dir,
                _env_guard: env_guard,
            }
        }
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_create_tables_is_idempotent(_ctx: &mut SchemaTestContext) {
        let mut db = Db::new().unwrap();

        // Db::new already ran it once; two more explicit runs must not fail.
        db.create_tables().unwrap();
        db.create_tables().unwrap();
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_data_survives_reopening(_ctx: &mut SchemaTestContext) {
        {
            let db = Db::new().unwrap();
            let project = Project::new("Persistent");
            Projects::new(&db).insert(&project).unwrap();
            let tasks = Tasks::new(&db);
            tasks.insert(&Task::new("Persistent", "Work")).unwrap();
            let task = tasks.fetch(&project).unwrap().remove(0);
            tasks.update_time(&task, 42).unwrap();
        }

        // A fresh handle (and a fresh create_tables run) sees the same rows.
        let db = Db::new().unwrap();
        let project = Projects::new(&db)
            .fetch()
            .unwrap()
            .into_iter()
            .find(|p| p.name == "Persistent")
            .unwrap();
        let stored = Tasks::new(&db).fetch(&project).unwrap().remove(0);
        assert_eq!(stored.name, "Work");
        assert_eq!(stored.time, 42);
    }
}
