use indexmap::IndexMap;
use serde::Serialize;

/// Final pairing of a record with its collected auxiliary user IDs.
/// An empty `user_ids` list is valid and means "no owners assigned".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub record_id: String,
    pub user_ids: Vec<i64>,
}

impl Assignment {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            user_ids: Vec::new(),
        }
    }
}

/// Working set of toggled records. Keyed by record ID, iterated in
/// insertion order so downstream prompting is deterministic.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: IndexMap<String, Assignment>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership. Re-adding a previously removed record starts
    /// over with an empty aux list.
    pub fn toggle(&mut self, record_id: &str) -> bool {
        if self.entries.shift_remove(record_id).is_some() {
            false
        } else {
            self.entries
                .insert(record_id.to_string(), Assignment::new(record_id));
            true
        }
    }

    pub fn contains(&self, record_id: &str) -> bool {
        self.entries.contains_key(record_id)
    }

    pub fn set_user_ids(&mut self, record_id: &str, user_ids: Vec<i64>) {
        if let Some(assignment) = self.entries.get_mut(record_id) {
            assignment.user_ids = user_ids;
        }
    }

    pub fn user_ids(&self, record_id: &str) -> Option<&[i64]> {
        self.entries
            .get(record_id)
            .map(|a| a.user_ids.as_slice())
    }

    /// Selected record IDs in the order they were toggled on.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.entries.into_values().collect()
    }
}
