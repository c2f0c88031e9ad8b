use crate::input::validators;
use crate::wizard::engine::Wizard;
use crate::wizard::step::StepDef;

pub const TEST_CASE_KINDS: [&str; 9] = [
    "general",
    "adhoc",
    "triangle",
    "integration",
    "user_acceptance",
    "regression",
    "security",
    "user_interface",
    "scenario",
];

pub fn project_wizard() -> Wizard {
    Wizard::new(
        "New Project",
        vec![
            StepDef::text("Name", "Enter Project Name:").with_validator(validators::required()),
            StepDef::text("Description", "Enter Description:"),
            StepDef::text("Version", "Enter Version:"),
            StepDef::text("Website URL", "Enter Website URL:"),
            StepDef::text("GitHub URL", "Enter GitHub URL (optional):"),
        ],
    )
}

pub fn test_case_wizard() -> Wizard {
    let kinds = TEST_CASE_KINDS.iter().map(|k| k.to_string()).collect();
    Wizard::new(
        "New Test Case",
        vec![
            StepDef::text("Title", "Enter Title:").with_validator(validators::required()),
            StepDef::choice("Kind", "Select Kind (↑/↓ to navigate, Enter to choose):", kinds),
            StepDef::text("Project ID", "Enter Project ID:")
                .with_validator(validators::positive_int()),
            StepDef::text("Description", "Enter Description:"),
            StepDef::text("Code", "Enter Code:"),
            StepDef::text("Feature/Module", "Enter Feature/Module:"),
            StepDef::text("Is Draft", "Is Draft (true|false):")
                .with_validator(validators::bool_literal()),
            StepDef::text("Tags", "Enter Tags (comma-separated):"),
        ],
    )
}

pub fn user_wizard() -> Wizard {
    Wizard::new(
        "New User",
        vec![
            StepDef::text("First Name", "Enter First Name:").with_validator(validators::required()),
            StepDef::text("Last Name", "Enter Last Name:").with_validator(validators::required()),
            StepDef::text("Display Name", "Enter Display Name:"),
            StepDef::text("Email", "Enter Email:").with_validator(validators::email()),
            StepDef::masked("Password", "Enter Password:").with_validator(validators::required()),
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
    )
}
