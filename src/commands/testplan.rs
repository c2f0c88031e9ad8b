use crate::client::Client;
use crate::schema::{AssignTestsToPlanRequest, MessageResponse, TestCaseListResponse};
use crate::selector::runner::{self, SelectorOutcome};
use crate::selector::{RecordView, Selector};

pub fn assign(project_id: i64, plan_id: i64) -> anyhow::Result<()> {
    let client = Client::from_env();
    let response: TestCaseListResponse =
        client.get(&format!("v1/projects/{project_id}/test-cases"))?;

    if response.test_cases.is_empty() {
        println!("No test cases found for project {project_id}.");
        return Ok(());
    }

    let records: Vec<RecordView> = response
        .test_cases
        .iter()
        .map(|tc| {
            RecordView::new(
                &tc.id,
                &tc.title,
                format!("Code: {} | Kind: {}", tc.code, tc.kind),
            )
        })
        .collect();

    match runner::run(Selector::new(records))? {
        SelectorOutcome::Cancelled => {
            println!("Assignment cancelled; nothing was submitted.");
            Ok(())
        }
        SelectorOutcome::Committed(assignments) => {
            if assignments.is_empty() {
                println!("No test cases selected.");
                return Ok(());
            }

            let payload = AssignTestsToPlanRequest {
                project_id,
                plan_id,
                planned_tests: assignments.into_iter().map(Into::into).collect(),
            };
            let response: MessageResponse =
                client.post(&format!("v1/test-plans/{plan_id}/test-cases"), &payload)?;
            println!("{}", response.message);
            Ok(())
        }
    }
}
