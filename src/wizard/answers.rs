use indexmap::IndexMap;

/// Field-name → collected-value map produced by a wizard. Keys are fixed
/// by the step definitions; re-entering a step overwrites its key.
/// Values are raw strings; parsing into numbers or booleans happens at
/// the boundary that consumes the finished set, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: IndexMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(|s| s.as_str())
    }

    /// Trimmed value, or `None` when the field is absent or blank.
    pub fn get_trimmed(&self, field: &str) -> Option<&str> {
        self.get(field)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
