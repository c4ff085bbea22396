#[cfg(test)]
mod tests {
    use timetracker::libs::messages::macros::is_debug_mode;
    use timetracker::libs::messages::Message;

    #[test]
    fn test_timetracker_debug_enables_debug_mode() {
        // This test runs in its own binary, so the OnceLock cache is primed
        // here for the first time. The same detection drives both the msg_*
        // macro routing and the subscriber setup in main, so the application
        // variable alone must flip it on.
        std::env::remove_var("RUST_LOG");
        std::env::set_var("TIMETRACKER_DEBUG", "1");
        assert!(is_debug_mode());
    }

    #[test]
    fn test_status_line_wording() {
        let status = Message::TrackingStatus("Alpha".to_string(), "Work".to_string(), 3, 45);
        assert_eq!(status.to_string(), "Working on Alpha/Work for 3 minutes (45 minutes total)");
    }

    #[test]
    fn test_no_projects_wording() {
        assert_eq!(Message::NoProjects.to_string(), "No projects yet.");
    }
}
