pub mod auth;
pub mod client;
pub mod commands;
pub mod errors;
pub mod input;
pub mod schema;
pub mod selector;
pub mod terminal;
pub mod ui;
pub mod wizard;

pub use errors::RunError;
pub use selector::{Assignment, RecordView, SelectionSet, Selector};
pub use wizard::{AnswerSet, Wizard, WizardOutcome};
