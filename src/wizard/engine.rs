use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyEvent};
use crate::wizard::answers::AnswerSet;
use crate::wizard::step::StepDef;
use tracing::debug;

/// Cross-field rule checked when its step commits: the entered value
/// plus everything collected so far.
pub type Rule = Box<dyn Fn(&str, &AnswerSet) -> Result<(), String> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Step(usize),
    Summary,
}

/// How the wizard ended. Cancellation is a first-class outcome, not an
/// error; callers must branch on it before touching the answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed(AnswerSet),
    Cancelled,
}

struct BoundStep {
    def: StepDef,
    widget: Box<dyn Input>,
}

/// Step-sequenced input collection: a fixed list of steps walked
/// forward by `advance`, backward by `retreat`, ending in a Summary
/// confirmation that freezes the AnswerSet.
///
/// The engine is a pure state machine over key events; it owns no
/// terminal handles and can be driven entirely from tests.
pub struct Wizard {
    title: String,
    steps: Vec<BoundStep>,
    rules: Vec<(String, Rule)>,
    position: Position,
    answers: AnswerSet,
    error: Option<String>,
}

impl Wizard {
    pub fn new(title: impl Into<String>, defs: Vec<StepDef>) -> Self {
        assert!(!defs.is_empty(), "a wizard needs at least one step");

        let steps = defs
            .into_iter()
            .map(|def| {
                let widget = def.build_widget();
                BoundStep { def, widget }
            })
            .collect();

        Self {
            title: title.into(),
            steps,
            rules: Vec::new(),
            position: Position::Step(0),
            answers: AnswerSet::new(),
            error: None,
        }
    }

    pub fn with_rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.rules.push((field.into(), rule));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn step_defs(&self) -> impl Iterator<Item = &StepDef> {
        self.steps.iter().map(|s| &s.def)
    }

    pub fn current_step(&self) -> Option<&StepDef> {
        match self.position {
            Position::Step(index) => Some(&self.steps[index].def),
            Position::Summary => None,
        }
    }

    pub fn current_widget(&self) -> Option<&dyn Input> {
        match self.position {
            Position::Step(index) => Some(self.steps[index].widget.as_ref()),
            Position::Summary => None,
        }
    }

    /// Routes one key event. `Some(outcome)` means the wizard is done
    /// and must not receive further events.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<WizardOutcome> {
        if key.is_cancel() {
            return Some(self.cancel());
        }

        match self.position {
            Position::Summary => match key.code {
                KeyCode::Enter => Some(self.complete()),
                KeyCode::Left => {
                    self.retreat();
                    None
                }
                _ => None,
            },
            Position::Step(index) => {
                let result = self.steps[index].widget.handle_key(key.code, key.modifiers);
                match result {
                    KeyResult::Submit => {
                        let raw = self.steps[index].widget.value();
                        self.advance(&raw);
                        None
                    }
                    KeyResult::Handled => {
                        self.error = None;
                        None
                    }
                    KeyResult::NotHandled => {
                        // A released Left key is back-navigation.
                        if key.code == KeyCode::Left {
                            self.retreat();
                        }
                        None
                    }
                }
            }
        }
    }

    /// Validates and commits `raw` for the current step. On success the
    /// current step moves forward (or to Summary after the last step).
    /// On rejection the step is unchanged, the input is cleared and an
    /// inline message is set; the caller sees only `false`.
    pub fn advance(&mut self, raw: &str) -> bool {
        let Position::Step(index) = self.position else {
            return false;
        };

        if let Err(message) = self.validate(index, raw) {
            debug!(step = index, %message, "step input rejected");
            self.steps[index].widget.clear();
            self.error = Some(message);
            return false;
        }

        let field = self.steps[index].def.field.clone();
        self.answers.set(field, raw);
        self.error = None;

        if index + 1 < self.steps.len() {
            self.enter_step(index + 1);
        } else {
            debug!("entering summary");
            self.position = Position::Summary;
        }
        true
    }

    /// Moves one step back, keeping the previously stored answer in
    /// place for re-edit. No-op on the first step.
    pub fn retreat(&mut self) {
        match self.position {
            Position::Step(0) => {}
            Position::Step(index) => self.enter_step(index - 1),
            Position::Summary => self.enter_step(self.steps.len() - 1),
        }
        self.error = None;
    }

    pub fn cancel(&mut self) -> WizardOutcome {
        debug!("wizard cancelled");
        WizardOutcome::Cancelled
    }

    /// Freezes the AnswerSet. Only valid at the Summary position;
    /// calling it earlier is a programming error, not a user path.
    pub fn complete(&mut self) -> WizardOutcome {
        assert!(
            self.position == Position::Summary,
            "complete() is only valid at the summary step"
        );
        WizardOutcome::Completed(std::mem::take(&mut self.answers))
    }

    fn enter_step(&mut self, index: usize) {
        debug!(step = index, "entering step");
        self.position = Position::Step(index);
        if let Some(previous) = self.answers.get(&self.steps[index].def.field) {
            let previous = previous.to_string();
            self.steps[index].widget.set_value(previous);
        }
    }

    fn validate(&self, index: usize, raw: &str) -> Result<(), String> {
        for validator in &self.steps[index].def.validators {
            validator(raw)?;
        }
        let field = &self.steps[index].def.field;
        for (rule_field, rule) in &self.rules {
            if rule_field == field {
                rule(raw, &self.answers)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::validators;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    fn type_text(wizard: &mut Wizard, text: &str) {
        for ch in text.chars() {
            wizard.handle_key(key(KeyCode::Char(ch)));
        }
    }

    fn project_steps() -> Vec<StepDef> {
        vec![
            StepDef::text("Name", "Enter Project Name:"),
            StepDef::text("Version", "Enter Version:"),
            StepDef::text("Website URL", "Enter Website URL:"),
        ]
    }

    #[test]
    fn walks_all_steps_to_summary_and_completes() {
        let mut wizard = Wizard::new("New Project", project_steps());
        assert!(wizard.advance("Acme"));
        assert!(wizard.advance("1.0"));
        assert!(wizard.advance("https://acme.test"));
        assert_eq!(wizard.position(), Position::Summary);

        let WizardOutcome::Completed(answers) = wizard.complete() else {
            panic!("expected completion");
        };
        let fields: Vec<&str> = answers.fields().collect();
        assert_eq!(fields, vec!["Name", "Version", "Website URL"]);
        assert_eq!(answers.get("Name"), Some("Acme"));
    }

    #[test]
    fn retreat_then_advance_with_same_value_is_a_noop_round_trip() {
        let mut wizard = Wizard::new("New Project", project_steps());
        wizard.advance("Acme");
        wizard.advance("1.0");
        let before = wizard.answers().clone();

        wizard.retreat();
        assert_eq!(wizard.position(), Position::Step(1));
        assert!(wizard.advance("1.0"));

        assert_eq!(*wizard.answers(), before);
        assert_eq!(wizard.position(), Position::Step(2));
    }

    #[test]
    fn retreat_is_a_noop_on_the_first_step() {
        let mut wizard = Wizard::new("New Project", project_steps());
        wizard.retreat();
        assert_eq!(wizard.position(), Position::Step(0));
    }

    #[test]
    fn reentering_a_step_overwrites_its_answer() {
        let mut wizard = Wizard::new("New Project", project_steps());
        wizard.advance("Acme");
        wizard.retreat();
        // The prior value is preserved in the widget for re-edit.
        assert_eq!(wizard.current_widget().unwrap().value(), "Acme");
        wizard.advance("Acme2");
        wizard.advance("1.0");
        wizard.advance("https://acme.test");

        let WizardOutcome::Completed(answers) = wizard.complete() else {
            panic!("expected completion");
        };
        assert_eq!(answers.get("Name"), Some("Acme2"));
        assert_eq!(answers.get("Version"), Some("1.0"));
        assert_eq!(answers.get("Website URL"), Some("https://acme.test"));
    }

    #[test]
    fn numeric_step_rejects_repeatedly_without_lockout() {
        let mut wizard = Wizard::new(
            "New Test Case",
            vec![
                StepDef::text("Project ID", "Enter Project ID:")
                    .with_validator(validators::positive_int()),
            ],
        );

        for raw in ["0", "abc", "0"] {
            assert!(!wizard.advance(raw));
            assert_eq!(wizard.position(), Position::Step(0));
            assert!(wizard.error().is_some());
        }

        assert!(wizard.advance("42"));
        assert_eq!(wizard.position(), Position::Summary);
    }

    #[test]
    fn rejection_clears_the_widget() {
        let mut wizard = Wizard::new(
            "New Test Case",
            vec![
                StepDef::text("Is Draft", "Is Draft (true|false):")
                    .with_validator(validators::bool_literal()),
            ],
        );
        type_text(&mut wizard, "maybe");
        wizard.handle_key(key(KeyCode::Enter));
        assert_eq!(wizard.current_widget().unwrap().value(), "");
        assert!(wizard.error().is_some());
    }

    #[test]
    fn cancel_is_distinct_from_completion() {
        let mut wizard = Wizard::new("New Project", project_steps());
        type_text(&mut wizard, "Acme");
        let outcome = wizard.handle_key(KeyEvent::ctrl(KeyCode::Char('c')));
        assert_eq!(outcome, Some(WizardOutcome::Cancelled));
    }

    #[test]
    fn summary_left_retreats_to_last_step() {
        let mut wizard = Wizard::new("New Project", project_steps());
        wizard.advance("Acme");
        wizard.advance("1.0");
        wizard.advance("https://acme.test");
        assert_eq!(wizard.position(), Position::Summary);

        wizard.handle_key(key(KeyCode::Left));
        assert_eq!(wizard.position(), Position::Step(2));
        assert_eq!(
            wizard.current_widget().unwrap().value(),
            "https://acme.test"
        );
    }

    #[test]
    fn cross_field_rule_rejects_mismatched_confirmation() {
        let mut wizard = Wizard::new(
            "New User",
            vec![
                StepDef::masked("Password", "Enter Password:"),
                StepDef::masked("Confirm Password", "Confirm Password:"),
            ],
        )
        .with_rule(
            "Confirm Password",
            Box::new(|value, answers| {
                if answers.get("Password") == Some(value) {
                    Ok(())
                } else {
                    Err("Passwords do not match. Please try again.".to_string())
                }
            }),
        );

        wizard.advance("hunter2!");
        assert!(!wizard.advance("hunter3!"));
        assert_eq!(wizard.position(), Position::Step(1));
        assert!(wizard.advance("hunter2!"));
        assert_eq!(wizard.position(), Position::Summary);
    }

    #[test]
    fn typing_after_rejection_clears_the_error() {
        let mut wizard = Wizard::new(
            "New Test Case",
            vec![
                StepDef::text("Project ID", "Enter Project ID:")
                    .with_validator(validators::positive_int()),
            ],
        );
        wizard.advance("abc");
        assert!(wizard.error().is_some());
        wizard.handle_key(key(KeyCode::Char('4')));
        assert!(wizard.error().is_none());
    }

    #[test]
    fn left_key_in_empty_input_navigates_back() {
        let mut wizard = Wizard::new("New Project", project_steps());
        wizard.advance("Acme");
        wizard.handle_key(key(KeyCode::Left));
        assert_eq!(wizard.position(), Position::Step(0));
    }
}
