/// Append-only history of one run. Joined with newlines it becomes the next
/// model prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn start(request: &str) -> Self {
        Self {
            entries: vec![format!("User request: {request}")],
        }
    }

    pub fn push_model_output(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    pub fn push_observation(&mut self, observation: &str) {
        self.entries.push(format!("Observation: {observation}"));
    }

    pub fn prompt(&self) -> String {
        self.entries.join("\n")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
