use crate::auth;
use crate::client::Client;
use crate::schema::{LoginRequest, LoginResponse};
use anyhow::{Context, bail};

pub fn login(email: &str, password: &str) -> anyhow::Result<()> {
    if email.is_empty() || password.is_empty() {
        bail!("email and password are required");
    }

    let payload = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = Client::from_env().post("v1/auth/login", &payload)?;

    if response.token.is_empty() {
        bail!("login failed: no token received");
    }

    auth::save_token(&response.token).context("failed to save token")?;
    println!("Logged in successfully!");
    Ok(())
}

pub fn logout() -> anyhow::Result<()> {
    match auth::delete_token() {
        Ok(()) => println!("Logged out."),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            println!("No active session.");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
