use crate::client::Client;
use crate::schema::{MessageResponse, NewProjectRequest, ProjectListResponse};
use crate::wizard::engine::WizardOutcome;
use crate::wizard::{forms, runner};

pub fn create() -> anyhow::Result<()> {
    match runner::run(forms::project_wizard())? {
        WizardOutcome::Cancelled => {
            println!("Project creation cancelled.");
            Ok(())
        }
        WizardOutcome::Completed(answers) => {
            let payload = NewProjectRequest::from_answers(&answers)?;
            let response: MessageResponse = Client::from_env().post("v1/projects", &payload)?;
            println!("{}", response.message);
            Ok(())
        }
    }
}

pub fn list() -> anyhow::Result<()> {
    let response: ProjectListResponse = Client::from_env().get("v1/projects")?;
    if response.projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }
    for project in &response.projects {
        println!(
            "{:>5}  {}  {}",
            project.id,
            project.title,
            if project.version.is_empty() {
                "N/A"
            } else {
                &project.version
            }
        );
    }
    Ok(())
}

pub fn delete(id: i64) -> anyhow::Result<()> {
    let response: MessageResponse = Client::from_env().delete(&format!("v1/projects/{id}"))?;
    println!("{}", response.message);
    Ok(())
}
