use crate::input::choice_input::ChoiceInput;
use crate::input::password_input::PasswordInput;
use crate::input::text_input::TextInput;
use crate::input::validators::Validator;
use crate::input::Input;

pub enum InputKind {
    FreeText,
    MaskedText,
    SingleChoice(Vec<String>),
}

/// Definition of one field-collection stage. Immutable once the wizard
/// is built; only the wizard's current-step pointer moves.
pub struct StepDef {
    pub field: String,
    pub prompt: String,
    pub kind: InputKind,
    pub validators: Vec<Validator>,
}

impl StepDef {
    pub fn text(field: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prompt: prompt.into(),
            kind: InputKind::FreeText,
            validators: Vec::new(),
        }
    }

    pub fn masked(field: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prompt: prompt.into(),
            kind: InputKind::MaskedText,
            validators: Vec::new(),
        }
    }

    pub fn choice(
        field: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            field: field.into(),
            prompt: prompt.into(),
            kind: InputKind::SingleChoice(options),
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub(crate) fn build_widget(&self) -> Box<dyn Input> {
        match &self.kind {
            InputKind::FreeText => Box::new(TextInput::new()),
            InputKind::MaskedText => Box::new(PasswordInput::new()),
            InputKind::SingleChoice(options) => Box::new(ChoiceInput::new(options.clone())),
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self.kind, InputKind::MaskedText)
    }
}
