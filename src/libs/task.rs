/// A unit of tracked work belonging to exactly one project.
///
/// `time` holds the cumulative minutes worked and is the only field that
/// ever changes after creation.
#[derive(Debug, Clone)]
pub struct Task {
    pub project: String,
    pub name: String,
    pub time: i64,
}

impl Task {
    pub fn new(project: &str, name: &str) -> Self {
        Task {
            project: project.to_string(),
            name: name.to_string(),
            time: 0,
        }
    }
}
