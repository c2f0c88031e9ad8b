use caseline::terminal::{KeyCode, KeyEvent};
use caseline::wizard::engine::Position;
use caseline::wizard::forms;
use caseline::{Wizard, WizardOutcome};

fn press(wizard: &mut Wizard, code: KeyCode) -> Option<WizardOutcome> {
    wizard.handle_key(KeyEvent::plain(code))
}

fn type_line(wizard: &mut Wizard, text: &str) {
    for ch in text.chars() {
        press(wizard, KeyCode::Char(ch));
    }
    press(wizard, KeyCode::Enter);
}

#[test]
fn project_wizard_reedit_scenario() {
    let mut wizard = forms::project_wizard();

    // Enter the name, go back, re-enter it, then finish the run.
    type_line(&mut wizard, "Acme");
    press(&mut wizard, KeyCode::Left);
    assert_eq!(wizard.position(), Position::Step(0));

    // The prior value is still there; replace it wholesale.
    for _ in 0..4 {
        press(&mut wizard, KeyCode::Backspace);
    }
    type_line(&mut wizard, "Acme2");

    type_line(&mut wizard, "A test-management demo");
    type_line(&mut wizard, "1.0");
    type_line(&mut wizard, "https://acme.test");
    type_line(&mut wizard, "");
    assert_eq!(wizard.position(), Position::Summary);

    let outcome = press(&mut wizard, KeyCode::Enter);
    let Some(WizardOutcome::Completed(answers)) = outcome else {
        panic!("expected a completed wizard, got {outcome:?}");
    };

    assert_eq!(answers.get("Name"), Some("Acme2"));
    assert_eq!(answers.get("Version"), Some("1.0"));
    assert_eq!(answers.get("Website URL"), Some("https://acme.test"));

    let fields: Vec<&str> = answers.fields().collect();
    assert_eq!(
        fields,
        vec!["Name", "Description", "Version", "Website URL", "GitHub URL"]
    );
}

#[test]
fn test_case_wizard_choice_step_via_keys() {
    let mut wizard = forms::test_case_wizard();
    type_line(&mut wizard, "Login works");

    // Kind step: move the highlight down twice, then choose.
    press(&mut wizard, KeyCode::Down);
    press(&mut wizard, KeyCode::Down);
    press(&mut wizard, KeyCode::Enter);
    assert_eq!(wizard.position(), Position::Step(2));
    assert_eq!(wizard.answers().get("Kind"), Some("triangle"));
}

#[test]
fn invalid_project_id_keeps_the_wizard_on_the_step() {
    let mut wizard = forms::test_case_wizard();
    type_line(&mut wizard, "Login works");
    press(&mut wizard, KeyCode::Enter); // accept default kind

    for attempt in ["0", "abc", "0"] {
        type_line(&mut wizard, attempt);
        assert_eq!(wizard.position(), Position::Step(2), "attempt {attempt}");
    }

    type_line(&mut wizard, "42");
    assert_eq!(wizard.position(), Position::Step(3));
}

#[test]
fn escape_cancels_from_any_step() {
    let mut wizard = forms::user_wizard();
    type_line(&mut wizard, "Ada");
    let outcome = press(&mut wizard, KeyCode::Esc);
    assert_eq!(outcome, Some(WizardOutcome::Cancelled));
}
