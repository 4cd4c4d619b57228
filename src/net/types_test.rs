use super::*;
use serde_json::json;

// =============================================================
// Decoding server payloads
// =============================================================

#[test]
fn user_decodes_mongo_id() {
    let user: User = serde_json::from_value(json!({
        "_id": "u1",
        "email": "a@b.com",
        "full_name": "A B",
        "avatar": null
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.full_name, "A B");
    assert!(user.avatar.is_none());
}

#[test]
fn auth_response_tolerates_missing_fields() {
    let auth: AuthResponse = serde_json::from_value(json!({})).unwrap();
    assert!(auth.access_token.is_none());
    assert!(auth.refresh_token.is_none());
    assert!(auth.user.is_none());
}

#[test]
fn project_defaults_status_when_absent() {
    let project: Project = serde_json::from_value(json!({
        "_id": "p1",
        "name": "Launch",
        "workspace_id": "w1"
    }))
    .unwrap();
    assert_eq!(project.status, ProjectStatus::NotStarted);
    assert!(project.assigned_to.is_empty());
}

#[test]
fn task_decodes_wire_enums() {
    let task: Task = serde_json::from_value(json!({
        "_id": "t1",
        "title": "Ship it",
        "project_id": "p1",
        "status": "in_progress",
        "priority": "high"
    }))
    .unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, Priority::High);
}

#[test]
fn dashboard_stats_decode() {
    let stats: DashboardStats = serde_json::from_value(json!({
        "total_projects": 3,
        "active_projects": 1,
        "completed_projects": 1,
        "total_tasks": 7,
        "pending_tasks": 2,
        "in_progress_tasks": 3,
        "completed_tasks": 2,
        "total_members": 4,
        "projects_by_status": { "not_started": 1, "in_progress": 1, "completed": 1 },
        "tasks_by_priority": { "low": 1, "medium": 4, "high": 2 }
    }))
    .unwrap();
    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.tasks_by_priority.medium, 4);
}

// =============================================================
// Encoding payloads
// =============================================================

#[test]
fn update_payloads_skip_absent_fields() {
    let update = TaskUpdate { status: Some(TaskStatus::Done), ..TaskUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "status": "done" }));
}

#[test]
fn new_project_serializes_wire_status() {
    let project = NewProject {
        name: "Launch".to_owned(),
        description: None,
        workspace_id: "w1".to_owned(),
        status: ProjectStatus::InProgress,
        deadline: None,
        assigned_to: vec![],
    };
    let value = serde_json::to_value(&project).unwrap();
    assert_eq!(value["status"], "in_progress");
    assert!(value.get("description").is_none());
}

// =============================================================
// Enum parsing (CLI arguments)
// =============================================================

#[test]
fn enums_parse_wire_spellings() {
    assert_eq!("completed".parse::<ProjectStatus>().unwrap(), ProjectStatus::Completed);
    assert_eq!("todo".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
    assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn enum_display_round_trips() {
    assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
    assert_eq!(Priority::Medium.to_string(), "medium");
    assert_eq!(ProjectStatus::NotStarted.to_string(), "not_started");
}

#[test]
fn user_settings_default_when_blob_empty() {
    let settings: UserSettings = serde_json::from_value(json!({})).unwrap();
    assert_eq!(settings, UserSettings::default());
    assert!(settings.notifications);
    assert!(!settings.biometric_unlock);
}
