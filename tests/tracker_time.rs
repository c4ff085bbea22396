#[cfg(test)]
mod tests {
    use std::time::Duration;
    use timetracker::libs::tracker::{elapsed_minutes, TICK_INTERVAL};

    #[test]
    fn test_status_line_period_is_one_minute() {
        assert_eq!(TICK_INTERVAL, Duration::from_secs(60));
    }

    #[test]
    fn test_sub_half_minute_rounds_down() {
        assert_eq!(elapsed_minutes(Duration::from_secs(0)), 0);
        assert_eq!(elapsed_minutes(Duration::from_secs(29)), 0);
        assert_eq!(elapsed_minutes(Duration::from_secs(89)), 1);
    }

    #[test]
    fn test_half_minute_rounds_away_from_zero() {
        // The documented tie rule: 30s is half a minute and rounds up, as
        // does every later half-minute boundary.
        assert_eq!(elapsed_minutes(Duration::from_secs(30)), 1);
        assert_eq!(elapsed_minutes(Duration::from_secs(90)), 2);
        assert_eq!(elapsed_minutes(Duration::from_secs(150)), 3);
    }

    #[test]
    fn test_whole_minutes_are_exact() {
        assert_eq!(elapsed_minutes(Duration::from_secs(60)), 1);
        assert_eq!(elapsed_minutes(Duration::from_secs(3600)), 60);
    }
}
