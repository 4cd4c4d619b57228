use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use aico::api;
use aico::api::tasks::TaskFilter;
use aico::auth::Authenticator;
use aico::config::{Config, DEFAULT_BASE_URL};
use aico::error::ClientError;
use aico::net::client::ApiClient;
use aico::net::types::{
    NewNote, NewProject, NewRequest, NewTask, NewWorkspace, NoteUpdate, Priority, ProjectStatus,
    ProjectUpdate, RequestUpdate, TaskStatus, TaskUpdate, Workspace, WorkspaceUpdate,
};
use aico::state::session::SessionStore;
use aico::state::settings;
use aico::state::workspace::WorkspaceState;
use aico::storage::Storage;

#[derive(Parser, Debug)]
#[command(name = "aico", about = "AICO project-management API client")]
struct Cli {
    #[arg(long, env = "AICO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory for the persisted session and settings files.
    #[arg(long, env = "AICO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Workspace id to scope resource commands to; defaults to the first
    /// workspace the account belongs to.
    #[arg(long, env = "AICO_WORKSPACE")]
    workspace: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Auth(AuthCommand),
    Workspace(WorkspaceCommand),
    Project(ProjectCommand),
    Task(TaskCommand),
    Request(RequestCommand),
    Note(NoteCommand),
    Team(TeamCommand),
    Activity(ActivityCommand),
    /// Dashboard statistics for the scoped workspace.
    Stats,
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        full_name: String,
    },
    Logout,
    Whoami {
        /// Ask the server instead of printing the restored session user.
        #[arg(long, default_value_t = false)]
        remote: bool,
    },
}

#[derive(Args, Debug)]
struct WorkspaceCommand {
    #[command(subcommand)]
    command: WorkspaceSubcommand,
}

#[derive(Subcommand, Debug)]
enum WorkspaceSubcommand {
    List,
    Show {
        workspace_id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        workspace_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Invite {
        workspace_id: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Args, Debug)]
struct ProjectCommand {
    #[command(subcommand)]
    command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProjectSubcommand {
    List,
    Show {
        project_id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "not_started")]
        status: ProjectStatus,
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
        #[arg(long = "assign")]
        assigned_to: Vec<String>,
    },
    Update {
        project_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<ProjectStatus>,
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
        #[arg(long = "assign")]
        assigned_to: Vec<String>,
    },
    Delete {
        project_id: String,
    },
}

#[derive(Args, Debug)]
struct TaskCommand {
    #[command(subcommand)]
    command: TaskSubcommand,
}

#[derive(Subcommand, Debug)]
enum TaskSubcommand {
    List {
        /// Restrict to one project instead of the whole workspace.
        #[arg(long)]
        project: Option<String>,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        project: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "todo")]
        status: TaskStatus,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long)]
        assign: Option<String>,
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
    },
    Update {
        task_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        assign: Option<String>,
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
    },
    Delete {
        task_id: String,
    },
}

#[derive(Args, Debug)]
struct RequestCommand {
    #[command(subcommand)]
    command: RequestSubcommand,
}

#[derive(Subcommand, Debug)]
enum RequestSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
    },
    Update {
        request_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
    },
    Delete {
        request_id: String,
    },
}

#[derive(Args, Debug)]
struct NoteCommand {
    #[command(subcommand)]
    command: NoteSubcommand,
}

#[derive(Subcommand, Debug)]
enum NoteSubcommand {
    List,
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: String,
    },
    Update {
        note_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    Delete {
        note_id: String,
    },
}

#[derive(Args, Debug)]
struct TeamCommand {
    #[command(subcommand)]
    command: TeamSubcommand,
}

#[derive(Subcommand, Debug)]
enum TeamSubcommand {
    List,
}

#[derive(Args, Debug)]
struct ActivityCommand {
    #[command(subcommand)]
    command: ActivitySubcommand,
}

#[derive(Subcommand, Debug)]
enum ActivitySubcommand {
    List,
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    Show,
    Set {
        #[arg(long)]
        notifications: Option<bool>,
        #[arg(long)]
        biometric_unlock: Option<bool>,
        #[arg(long)]
        analytics: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = Config::new(&cli.base_url, cli.data_dir.clone());
    let storage = Storage::open(&config.data_dir)?;
    let session = Arc::new(SessionStore::new(storage.clone()));
    session.restore().await?;

    let auth = Authenticator::new(&config, session.clone())?;
    let client = ApiClient::new(&config, session.clone())?;

    // Settings and auth work without a workspace; everything else is
    // scoped to one.
    match cli.command {
        Command::Auth(auth_command) => run_auth(&auth, &client, auth_command).await,
        Command::Settings(settings_command) => run_settings(&storage, settings_command),
        command => {
            if !session.is_authenticated().await {
                return Err(ClientError::NotLoggedIn);
            }
            let workspaces = resolve_workspaces(&client, cli.workspace.as_deref()).await?;
            match command {
                Command::Workspace(workspace) => {
                    run_workspace(&client, workspaces, workspace).await
                }
                Command::Project(project) => {
                    run_project(&client, scoped_workspace(&workspaces)?, project).await
                }
                Command::Task(task) => {
                    run_task(&client, scoped_workspace(&workspaces)?, task).await
                }
                Command::Request(request) => {
                    run_request(&client, scoped_workspace(&workspaces)?, request).await
                }
                Command::Note(note) => {
                    run_note(&client, scoped_workspace(&workspaces)?, note).await
                }
                Command::Team(team) => {
                    run_team(&client, scoped_workspace(&workspaces)?, team).await
                }
                Command::Activity(activity) => {
                    run_activity(&client, scoped_workspace(&workspaces)?, activity).await
                }
                Command::Stats => run_stats(&client, scoped_workspace(&workspaces)?).await,
                Command::Auth(_) | Command::Settings(_) => unreachable!("handled above"),
            }
        }
    }
}

/// Cold-start workspace resolution: fetch the list, then honor an
/// explicit `--workspace` or fall back to the first workspace.
async fn resolve_workspaces(
    client: &ApiClient,
    requested: Option<&str>,
) -> Result<WorkspaceState, ClientError> {
    let mut state = WorkspaceState::default();
    state.set_workspaces(api::workspaces::list(client).await?);

    if let Some(id) = requested {
        let Some(workspace) = state.find(id).cloned() else {
            return Err(ClientError::Validation(format!("unknown workspace `{id}`")));
        };
        state.set_current_workspace(Some(workspace));
    } else {
        state.select_first_if_unset();
    }
    Ok(state)
}

fn scoped_workspace(state: &WorkspaceState) -> Result<&Workspace, ClientError> {
    state.current.as_ref().ok_or_else(|| {
        ClientError::Validation(
            "no workspace available; create one with `aico workspace create`".to_owned(),
        )
    })
}

async fn run_auth(
    auth: &Authenticator,
    client: &ApiClient,
    command: AuthCommand,
) -> Result<(), ClientError> {
    match command.command {
        AuthSubcommand::Login { email, password } => {
            let user = auth.login(&email, &password).await?;
            print_json(&user)
        }
        AuthSubcommand::Signup { email, password, full_name } => {
            let user = auth.signup(&email, &password, &full_name).await?;
            print_json(&user)
        }
        AuthSubcommand::Logout => {
            auth.logout().await?;
            println!("logged out");
            Ok(())
        }
        AuthSubcommand::Whoami { remote } => {
            if remote {
                let user = api::users::me(client).await?;
                return print_json(&user);
            }
            let user = client.session().current_user().await.ok_or(ClientError::NotLoggedIn)?;
            print_json(&user)
        }
    }
}

async fn run_workspace(
    client: &ApiClient,
    mut state: WorkspaceState,
    command: WorkspaceCommand,
) -> Result<(), ClientError> {
    match command.command {
        WorkspaceSubcommand::List => print_json(&state.workspaces),
        WorkspaceSubcommand::Show { workspace_id } => {
            let workspace = api::workspaces::get(client, &workspace_id).await?;
            print_json(&workspace)
        }
        WorkspaceSubcommand::Create { name, description } => {
            let created =
                api::workspaces::create(client, &NewWorkspace { name, description }).await?;
            state.add_workspace(created.clone());
            print_json(&created)
        }
        WorkspaceSubcommand::Update { workspace_id, name, description } => {
            let update = WorkspaceUpdate { name, description };
            let message = api::workspaces::update(client, &workspace_id, &update).await?;
            state.update_workspace(&workspace_id, &update);
            print_json(&message)
        }
        WorkspaceSubcommand::Invite { workspace_id, email } => {
            let message = api::workspaces::invite(client, &workspace_id, &email).await?;
            print_json(&message)
        }
    }
}

async fn run_project(
    client: &ApiClient,
    workspace: &Workspace,
    command: ProjectCommand,
) -> Result<(), ClientError> {
    match command.command {
        ProjectSubcommand::List => {
            let projects = api::projects::list(client, &workspace.id).await?;
            print_json(&projects)
        }
        ProjectSubcommand::Show { project_id } => {
            let project = api::projects::get(client, &project_id).await?;
            print_json(&project)
        }
        ProjectSubcommand::Create { name, description, status, deadline, assigned_to } => {
            let project = NewProject {
                name,
                description,
                workspace_id: workspace.id.clone(),
                status,
                deadline,
                assigned_to,
            };
            let created = api::projects::create(client, &project).await?;
            print_json(&created)
        }
        ProjectSubcommand::Update {
            project_id,
            name,
            description,
            status,
            deadline,
            assigned_to,
        } => {
            let update = ProjectUpdate {
                name,
                description,
                status,
                deadline,
                assigned_to: if assigned_to.is_empty() { None } else { Some(assigned_to) },
            };
            let message = api::projects::update(client, &project_id, &update).await?;
            print_json(&message)
        }
        ProjectSubcommand::Delete { project_id } => {
            let message = api::projects::delete(client, &project_id).await?;
            print_json(&message)
        }
    }
}

async fn run_task(
    client: &ApiClient,
    workspace: &Workspace,
    command: TaskCommand,
) -> Result<(), ClientError> {
    match command.command {
        TaskSubcommand::List { project } => {
            let filter = match project {
                Some(project_id) => TaskFilter { workspace_id: None, project_id: Some(project_id) },
                None => TaskFilter {
                    workspace_id: Some(workspace.id.clone()),
                    project_id: None,
                },
            };
            let tasks = api::tasks::list(client, &filter).await?;
            print_json(&tasks)
        }
        TaskSubcommand::Create {
            title,
            project,
            description,
            status,
            priority,
            assign,
            deadline,
        } => {
            let task = NewTask {
                title,
                description,
                project_id: project,
                status,
                priority,
                assigned_to: assign,
                deadline,
            };
            let created = api::tasks::create(client, &task).await?;
            print_json(&created)
        }
        TaskSubcommand::Update {
            task_id,
            title,
            description,
            status,
            priority,
            assign,
            deadline,
        } => {
            let update = TaskUpdate {
                title,
                description,
                status,
                priority,
                assigned_to: assign,
                deadline,
            };
            let message = api::tasks::update(client, &task_id, &update).await?;
            print_json(&message)
        }
        TaskSubcommand::Delete { task_id } => {
            let message = api::tasks::delete(client, &task_id).await?;
            print_json(&message)
        }
    }
}

async fn run_request(
    client: &ApiClient,
    workspace: &Workspace,
    command: RequestCommand,
) -> Result<(), ClientError> {
    match command.command {
        RequestSubcommand::List => {
            let requests = api::requests::list(client, &workspace.id).await?;
            print_json(&requests)
        }
        RequestSubcommand::Create { title, description, priority, category, deadline } => {
            let request = NewRequest {
                title,
                description,
                workspace_id: workspace.id.clone(),
                priority,
                category,
                deadline,
            };
            let created = api::requests::create(client, &request).await?;
            print_json(&created)
        }
        RequestSubcommand::Update {
            request_id,
            title,
            description,
            priority,
            category,
            status,
            deadline,
        } => {
            let update =
                RequestUpdate { title, description, priority, category, status, deadline };
            let message = api::requests::update(client, &request_id, &update).await?;
            print_json(&message)
        }
        RequestSubcommand::Delete { request_id } => {
            let message = api::requests::delete(client, &request_id).await?;
            print_json(&message)
        }
    }
}

async fn run_note(
    client: &ApiClient,
    workspace: &Workspace,
    command: NoteCommand,
) -> Result<(), ClientError> {
    match command.command {
        NoteSubcommand::List => {
            let notes = api::notes::list(client, &workspace.id).await?;
            print_json(&notes)
        }
        NoteSubcommand::Create { title, content } => {
            let note = NewNote { title, content, workspace_id: workspace.id.clone() };
            let created = api::notes::create(client, &note).await?;
            print_json(&created)
        }
        NoteSubcommand::Update { note_id, title, content } => {
            let update = NoteUpdate { title, content };
            let message = api::notes::update(client, &note_id, &update).await?;
            print_json(&message)
        }
        NoteSubcommand::Delete { note_id } => {
            let message = api::notes::delete(client, &note_id).await?;
            print_json(&message)
        }
    }
}

async fn run_team(
    client: &ApiClient,
    workspace: &Workspace,
    command: TeamCommand,
) -> Result<(), ClientError> {
    match command.command {
        TeamSubcommand::List => {
            let members = api::team::list(client, &workspace.id).await?;
            print_json(&members)
        }
    }
}

async fn run_activity(
    client: &ApiClient,
    workspace: &Workspace,
    command: ActivityCommand,
) -> Result<(), ClientError> {
    match command.command {
        ActivitySubcommand::List => {
            let activities = api::activities::list(client, &workspace.id).await?;
            print_json(&activities)
        }
    }
}

async fn run_stats(client: &ApiClient, workspace: &Workspace) -> Result<(), ClientError> {
    let stats = api::analytics::dashboard(client, &workspace.id).await?;
    print_json(&stats)
}

fn run_settings(storage: &Storage, command: SettingsCommand) -> Result<(), ClientError> {
    match command.command {
        SettingsSubcommand::Show => print_json(&settings::load(storage)?),
        SettingsSubcommand::Set { notifications, biometric_unlock, analytics } => {
            let mut current = settings::load(storage)?;
            if let Some(notifications) = notifications {
                current.notifications = notifications;
            }
            if let Some(biometric_unlock) = biometric_unlock {
                current.biometric_unlock = biometric_unlock;
            }
            if let Some(analytics) = analytics {
                current.analytics = analytics;
            }
            settings::save(storage, &current)?;
            print_json(&current)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
