use super::*;

fn workspace(id: &str, name: &str) -> Workspace {
    Workspace {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        owner_id: "u1".to_owned(),
        member_ids: vec!["u1".to_owned()],
        created_at: None,
    }
}

fn named_update(name: &str) -> WorkspaceUpdate {
    WorkspaceUpdate { name: Some(name.to_owned()), ..WorkspaceUpdate::default() }
}

// =============================================================
// Defaults and replacement
// =============================================================

#[test]
fn workspace_state_defaults_empty() {
    let state = WorkspaceState::default();
    assert!(state.current.is_none());
    assert!(state.workspaces.is_empty());
}

#[test]
fn set_current_workspace_replaces() {
    let mut state = WorkspaceState::default();
    state.set_current_workspace(Some(workspace("w1", "Alpha")));
    state.set_current_workspace(Some(workspace("w2", "Beta")));
    assert_eq!(state.current.as_ref().map(|ws| ws.id.as_str()), Some("w2"));
}

#[test]
fn clearing_current_keeps_list_contents() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha"), workspace("w2", "Beta")]);
    state.set_current_workspace(Some(workspace("w1", "Alpha")));

    state.set_current_workspace(None);

    assert!(state.current.is_none());
    assert_eq!(state.workspaces.len(), 2);
    assert_eq!(state.workspaces[0].name, "Alpha");
}

#[test]
fn add_workspace_appends() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha")]);
    state.add_workspace(workspace("w2", "Beta"));
    assert_eq!(state.workspaces.len(), 2);
    assert_eq!(state.workspaces[1].id, "w2");
}

// =============================================================
// Partial updates and dual consistency
// =============================================================

#[test]
fn update_workspace_merges_into_list_entry() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha"), workspace("w2", "Beta")]);

    state.update_workspace("w2", &named_update("X"));

    assert_eq!(state.workspaces[0].name, "Alpha");
    assert_eq!(state.workspaces[1].name, "X");
}

#[test]
fn update_workspace_syncs_current_when_active() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha")]);
    state.set_current_workspace(Some(workspace("w1", "Alpha")));

    state.update_workspace("w1", &named_update("X"));

    assert_eq!(state.workspaces[0].name, "X");
    assert_eq!(state.current.as_ref().map(|ws| ws.name.as_str()), Some("X"));
}

#[test]
fn update_workspace_leaves_current_when_inactive() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha"), workspace("w2", "Beta")]);
    state.set_current_workspace(Some(workspace("w1", "Alpha")));

    state.update_workspace("w2", &named_update("X"));

    assert_eq!(state.current.as_ref().map(|ws| ws.name.as_str()), Some("Alpha"));
    assert_eq!(state.workspaces[1].name, "X");
}

#[test]
fn update_workspace_merges_description() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha")]);

    let update = WorkspaceUpdate {
        description: Some("roadmap".to_owned()),
        ..WorkspaceUpdate::default()
    };
    state.update_workspace("w1", &update);

    assert_eq!(state.workspaces[0].name, "Alpha");
    assert_eq!(state.workspaces[0].description.as_deref(), Some("roadmap"));
}

#[test]
fn update_unknown_workspace_is_noop() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha")]);
    state.update_workspace("w9", &named_update("X"));
    assert_eq!(state.workspaces[0].name, "Alpha");
}

// =============================================================
// First-workspace selection
// =============================================================

#[test]
fn select_first_if_unset_picks_head() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha"), workspace("w2", "Beta")]);
    state.select_first_if_unset();
    assert_eq!(state.current.as_ref().map(|ws| ws.id.as_str()), Some("w1"));
}

#[test]
fn select_first_if_unset_respects_existing_selection() {
    let mut state = WorkspaceState::default();
    state.set_workspaces(vec![workspace("w1", "Alpha"), workspace("w2", "Beta")]);
    state.set_current_workspace(Some(workspace("w2", "Beta")));
    state.select_first_if_unset();
    assert_eq!(state.current.as_ref().map(|ws| ws.id.as_str()), Some("w2"));
}

#[test]
fn select_first_with_no_workspaces_stays_none() {
    let mut state = WorkspaceState::default();
    state.select_first_if_unset();
    assert!(state.current.is_none());
}
