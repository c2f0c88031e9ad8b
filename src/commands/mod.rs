pub mod login;
pub mod module;
pub mod project;
pub mod testcase;
pub mod testplan;
pub mod user;

use crate::schema::{NewModuleRequest, UpdateModuleRequest};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "caseline",
    version,
    about = "Terminal client for the test-management API"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Discard the stored session token
    Logout,
    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Manage modules
    Module {
        #[command(subcommand)]
        action: ModuleAction,
    },
    /// Manage test cases
    Testcase {
        #[command(subcommand)]
        action: TestCaseAction,
    },
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage test plans
    Testplan {
        #[command(subcommand)]
        action: TestPlanAction,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// Create a project through the interactive wizard
    Create,
    /// List all projects
    List,
    /// Delete a project by ID
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ModuleAction {
    /// Create a module
    Create {
        #[arg(long)]
        project: i32,
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: ModuleFields,
    },
    /// Update a module by ID
    Update {
        id: i32,
        #[arg(long, default_value = "")]
        name: String,
        #[command(flatten)]
        fields: ModuleFields,
    },
    /// List all modules
    List,
    /// View module details
    View { id: i64 },
    /// Delete a module by ID
    Delete { id: i64 },
}

#[derive(Args)]
struct ModuleFields {
    #[arg(long, default_value = "")]
    code: String,
    #[arg(long, default_value_t = 0)]
    priority: i32,
    #[arg(long = "type", default_value = "")]
    kind: String,
    #[arg(long, default_value = "")]
    description: String,
}

#[derive(Subcommand)]
enum TestCaseAction {
    /// Create a test case through the interactive wizard
    Create,
    /// List the test cases of a project
    List {
        #[arg(long)]
        project: i64,
    },
    /// View a test case by ID
    View { id: String },
    /// Delete a test case by ID
    Delete { id: String },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user through the interactive wizard
    Create,
    /// List all users
    List,
    /// Get a user by ID
    Get { id: i64 },
    /// Delete a user by ID
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum TestPlanAction {
    /// Assign test cases of a project to a test plan
    Assign {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        plan: i64,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Login { email, password } => login::login(&email, &password),
            Command::Logout => login::logout(),
            Command::Project { action } => match action {
                ProjectAction::Create => project::create(),
                ProjectAction::List => project::list(),
                ProjectAction::Delete { id } => project::delete(id),
            },
            Command::Module { action } => match action {
                ModuleAction::Create {
                    project,
                    name,
                    fields,
                } => module::create(NewModuleRequest {
                    project_id: project,
                    name,
                    code: fields.code,
                    priority: fields.priority,
                    kind: fields.kind,
                    description: fields.description,
                }),
                ModuleAction::Update { id, name, fields } => module::update(UpdateModuleRequest {
                    id,
                    name,
                    code: fields.code,
                    priority: fields.priority,
                    kind: fields.kind,
                    description: fields.description,
                }),
                ModuleAction::List => module::list(),
                ModuleAction::View { id } => module::view(id),
                ModuleAction::Delete { id } => module::delete(id),
            },
            Command::Testcase { action } => match action {
                TestCaseAction::Create => testcase::create(),
                TestCaseAction::List { project } => testcase::list(project),
                TestCaseAction::View { id } => testcase::view(&id),
                TestCaseAction::Delete { id } => testcase::delete(&id),
            },
            Command::User { action } => match action {
                UserAction::Create => user::create(),
                UserAction::List => user::list(),
                UserAction::Get { id } => user::get(id),
                UserAction::Delete { id } => user::delete(id),
            },
            Command::Testplan { action } => match action {
                TestPlanAction::Assign { project, plan } => testplan::assign(project, plan),
            },
        }
    }
}
