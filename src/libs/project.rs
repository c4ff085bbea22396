/// A named grouping of tasks, unique by name.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
}

impl Project {
    pub fn new(name: &str) -> Self {
        Project { name: name.to_string() }
    }
}
