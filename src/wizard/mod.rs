pub mod answers;
pub mod engine;
pub mod forms;
pub mod runner;
pub mod step;
pub mod view;

pub use answers::AnswerSet;
pub use engine::{Wizard, WizardOutcome};
pub use step::{InputKind, StepDef};
