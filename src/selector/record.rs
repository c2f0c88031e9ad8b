/// Display projection of a selectable record: exactly what the list
/// needs and nothing of the domain schema behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
}

impl RecordView {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}
