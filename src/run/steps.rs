/// Ordered, human-readable description of every logical action in a run
#[derive(Debug, Clone, Default)]
pub struct StepLog {
    entries: Vec<String>,
}

impl StepLog {
    pub fn new() -> Self {
        StepLog {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries prefixed with their one-based step number
    pub fn numbered(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("Step {}: {}", i + 1, entry))
    }
}
