use crate::client::Client;
use crate::schema::{
    CreateTestCaseRequest, MessageResponse, TestCaseDetailResponse, TestCaseListResponse,
};
use crate::wizard::engine::WizardOutcome;
use crate::wizard::{forms, runner};

pub fn create() -> anyhow::Result<()> {
    match runner::run(forms::test_case_wizard())? {
        WizardOutcome::Cancelled => {
            println!("Test case creation cancelled.");
            Ok(())
        }
        WizardOutcome::Completed(answers) => {
            let payload = CreateTestCaseRequest::from_answers(&answers)?;
            let response: MessageResponse = Client::from_env().post("v1/test-cases", &payload)?;
            println!("{}", response.message);
            Ok(())
        }
    }
}

pub fn list(project_id: i64) -> anyhow::Result<()> {
    let response: TestCaseListResponse =
        Client::from_env().get(&format!("v1/projects/{project_id}/test-cases"))?;
    if response.test_cases.is_empty() {
        println!("No test cases found.");
        return Ok(());
    }
    for test_case in &response.test_cases {
        let draft = if test_case.is_draft { " (draft)" } else { "" };
        println!(
            "{}  [{}] {}{}",
            test_case.id, test_case.kind, test_case.title, draft
        );
    }
    Ok(())
}

pub fn view(id: &str) -> anyhow::Result<()> {
    let response: TestCaseDetailResponse =
        Client::from_env().get(&format!("v1/test-cases/{id}"))?;
    let tc = response.test_case;
    println!("Test Case Details:");
    println!("• ID: {}", tc.id);
    println!("• Project: {}", tc.project_id);
    println!("• Title: {}", tc.title);
    println!("• Code: {}", tc.code);
    println!("• Kind: {}", tc.kind);
    println!("• Description: {}", tc.description);
    println!("• Feature/Module: {}", tc.feature_or_module);
    println!("• Tags: {}", tc.tags.join(", "));
    println!("• Draft: {}", tc.is_draft);
    Ok(())
}

pub fn delete(id: &str) -> anyhow::Result<()> {
    let response: MessageResponse = Client::from_env().delete(&format!("v1/test-cases/{id}"))?;
    println!("{}", response.message);
    Ok(())
}
