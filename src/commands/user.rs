use crate::client::Client;
use crate::schema::{CompactUserListResponse, MessageResponse, NewUserRequest};
use crate::wizard::engine::WizardOutcome;
use crate::wizard::{forms, runner};

pub fn create() -> anyhow::Result<()> {
    match runner::run(forms::user_wizard())? {
        WizardOutcome::Cancelled => {
            println!("User creation cancelled.");
            Ok(())
        }
        WizardOutcome::Completed(answers) => {
            let payload = NewUserRequest::from_answers(&answers)?;
            let response: MessageResponse = Client::from_env().post("v1/users", &payload)?;
            println!("{}", response.message);
            Ok(())
        }
    }
}

pub fn list() -> anyhow::Result<()> {
    let response: CompactUserListResponse = Client::from_env().get("v1/users")?;
    println!("Number of Users: {}", response.users.len());
    for user in &response.users {
        println!(
            "• ID: {} | Name: {} | Email: {} | Created: {}",
            user.id, user.display_name, user.email, user.created_at
        );
    }
    Ok(())
}

/// User records vary by deployment; show whatever the server sends.
pub fn get(id: i64) -> anyhow::Result<()> {
    let user: serde_json::Value = Client::from_env().get(&format!("v1/users/{id}"))?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

pub fn delete(id: i64) -> anyhow::Result<()> {
    let _: serde_json::Value = Client::from_env().delete(&format!("v1/users/{id}"))?;
    println!("User deleted successfully.");
    Ok(())
}
