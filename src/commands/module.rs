use crate::client::Client;
use crate::schema::{ModuleListResponse, ModuleResponse, NewModuleRequest, UpdateModuleRequest};

pub fn create(payload: NewModuleRequest) -> anyhow::Result<()> {
    let _: serde_json::Value = Client::from_env().post("v1/modules", &payload)?;
    println!("Module created successfully.");
    Ok(())
}

pub fn update(payload: UpdateModuleRequest) -> anyhow::Result<()> {
    let _: serde_json::Value =
        Client::from_env().post(&format!("v1/modules/{}", payload.id), &payload)?;
    println!("Module updated successfully.");
    Ok(())
}

pub fn list() -> anyhow::Result<()> {
    let response: ModuleListResponse = Client::from_env().get("v1/modules")?;
    if response.modules.is_empty() {
        println!("No modules found.");
        return Ok(());
    }
    for module in &response.modules {
        println!("• [{}] {} — {}", module.id, module.name, module.description);
    }
    Ok(())
}

pub fn view(id: i64) -> anyhow::Result<()> {
    let module: ModuleResponse = Client::from_env().get(&format!("v1/modules/{id}"))?;
    println!("Module: {}", module.name);
    println!("ID: {}", module.id);
    println!("Description: {}", module.description);
    Ok(())
}

pub fn delete(id: i64) -> anyhow::Result<()> {
    let _: serde_json::Value = Client::from_env().delete(&format!("v1/modules/{id}"))?;
    println!("Module deleted successfully.");
    Ok(())
}
