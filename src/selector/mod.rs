pub mod collector;
pub mod engine;
pub mod record;
pub mod runner;
pub mod selection;
pub mod view;

pub use engine::{BrowseOutcome, Selector};
pub use record::RecordView;
pub use selection::{Assignment, SelectionSet};
