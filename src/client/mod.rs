use crate::auth;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use thiserror::Error;
use tracing::debug;

const HOST_ENV: &str = "CASELINE_HOST";
const DEFAULT_HOST: &str = "http://localhost:4597";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
}

/// Blocking JSON client for the test-management API. Knows only the
/// base URL and the bearer token; payload shapes live in `schema`.
pub struct Client {
    base_url: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: auth::load_token().ok(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Connects to `CASELINE_HOST`, falling back to the local default.
    pub fn from_env() -> Self {
        let url = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Self::new(url)
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = join_url(&self.base_url, path);
        debug!(%url, "GET");
        let response = self.authorize(self.http.get(&url)).send()?;
        Self::parse(response)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = join_url(&self.base_url, path);
        debug!(%url, "POST");
        let response = self.authorize(self.http.post(&url)).json(body).send()?;
        Self::parse(response)
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = join_url(&self.base_url, path);
        debug!(%url, "DELETE");
        let response = self.authorize(self.http.delete(&url)).send()?;
        Self::parse(response)
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn parse<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json()?)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
