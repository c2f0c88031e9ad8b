//! Wire payloads for the test-management API, plus the boundary
//! conversions that turn a wizard's raw string answers into typed
//! request fields. Parsing of booleans and numbers happens here, never
//! inside the wizard engine.

use crate::selector::selection::Assignment;
use crate::wizard::answers::AnswerSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),
    #[error("field `{field}` is not a valid {expected}: {raw}")]
    Invalid {
        field: &'static str,
        expected: &'static str,
        raw: String,
    },
}

fn required_field(answers: &AnswerSet, field: &'static str) -> Result<String, AnswerError> {
    answers
        .get_trimmed(field)
        .map(str::to_string)
        .ok_or(AnswerError::Missing(field))
}

fn optional_field(answers: &AnswerSet, field: &str) -> String {
    answers.get_trimmed(field).unwrap_or_default().to_string()
}

fn int_field(answers: &AnswerSet, field: &'static str) -> Result<i64, AnswerError> {
    let raw = required_field(answers, field)?;
    raw.parse::<i64>().map_err(|_| AnswerError::Invalid {
        field,
        expected: "integer",
        raw,
    })
}

fn bool_field(answers: &AnswerSet, field: &'static str) -> Result<bool, AnswerError> {
    let raw = required_field(answers, field)?;
    match raw.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AnswerError::Invalid {
            field,
            expected: "boolean",
            raw,
        }),
    }
}

fn list_field(answers: &AnswerSet, field: &str) -> Vec<String> {
    optional_field(answers, field)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NewProjectRequest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub website_url: String,
    pub github_url: String,
}

impl NewProjectRequest {
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, AnswerError> {
        Ok(Self {
            name: required_field(answers, "Name")?,
            description: optional_field(answers, "Description"),
            version: optional_field(answers, "Version"),
            website_url: optional_field(answers, "Website URL"),
            github_url: optional_field(answers, "GitHub URL"),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub github_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
}

#[derive(Debug, Serialize)]
pub struct CreateTestCaseRequest {
    pub title: String,
    pub kind: String,
    pub project_id: i64,
    pub description: String,
    pub code: String,
    pub feature_or_module: String,
    pub is_draft: bool,
    pub tags: Vec<String>,
}

impl CreateTestCaseRequest {
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, AnswerError> {
        Ok(Self {
            title: required_field(answers, "Title")?,
            kind: required_field(answers, "Kind")?,
            project_id: int_field(answers, "Project ID")?,
            description: optional_field(answers, "Description"),
            code: optional_field(answers, "Code"),
            feature_or_module: optional_field(answers, "Feature/Module"),
            is_draft: bool_field(answers, "Is Draft")?,
            tags: list_field(answers, "Tags"),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TestCaseResponse {
    pub id: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub feature_or_module: String,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct TestCaseListResponse {
    pub test_cases: Vec<TestCaseResponse>,
}

/// Single-case lookups come wrapped in a `test_case` envelope.
#[derive(Debug, Deserialize)]
pub struct TestCaseDetailResponse {
    pub test_case: TestCaseResponse,
}

#[derive(Debug, Serialize)]
pub struct NewModuleRequest {
    #[serde(rename = "projectID")]
    pub project_id: i32,
    pub name: String,
    pub code: String,
    pub priority: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateModuleRequest {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub priority: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ModuleResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ModuleListResponse {
    pub modules: Vec<ModuleResponse>,
}

#[derive(Debug, Serialize)]
pub struct NewUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
}

impl NewUserRequest {
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, AnswerError> {
        Ok(Self {
            first_name: required_field(answers, "First Name")?,
            last_name: required_field(answers, "Last Name")?,
            display_name: optional_field(answers, "Display Name"),
            email: required_field(answers, "Email")?,
            password: required_field(answers, "Password")?,
        })
    }
}

/// The user list endpoint speaks camelCase, unlike the rest of the API.
#[derive(Debug, Deserialize)]
pub struct UserCompact {
    pub id: i64,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "username", default)]
    pub email: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CompactUserListResponse {
    #[serde(default)]
    pub total: usize,
    pub users: Vec<UserCompact>,
}

#[derive(Debug, Serialize)]
pub struct TestCaseAssignment {
    pub test_case_id: String,
    pub user_ids: Vec<i64>,
}

impl From<Assignment> for TestCaseAssignment {
    fn from(assignment: Assignment) -> Self {
        Self {
            test_case_id: assignment.record_id,
            user_ids: assignment.user_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssignTestsToPlanRequest {
    pub project_id: i64,
    #[serde(rename = "test_plan_id")]
    pub plan_id: i64,
    pub planned_tests: Vec<TestCaseAssignment>,
}
