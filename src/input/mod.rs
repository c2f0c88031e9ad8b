pub mod choice_input;
pub mod input;
pub mod password_input;
pub mod text_input;
pub mod validators;

pub use input::{Input, KeyResult};
