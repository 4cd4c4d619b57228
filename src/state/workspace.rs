//! Workspace selection state.
//!
//! Volatile by design: rebuilt from a fetch on every run, so there is no
//! persisted "current workspace" to get out of sync with the server.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use crate::net::types::{Workspace, WorkspaceUpdate};

#[derive(Clone, Debug, Default)]
pub struct WorkspaceState {
    pub current: Option<Workspace>,
    pub workspaces: Vec<Workspace>,
}

impl WorkspaceState {
    /// Pure replacement; no validation that the workspace belongs to the
    /// known list.
    pub fn set_current_workspace(&mut self, workspace: Option<Workspace>) {
        self.current = workspace;
    }

    /// Replace the full list, typically after a fetch-all call.
    pub fn set_workspaces(&mut self, workspaces: Vec<Workspace>) {
        self.workspaces = workspaces;
    }

    /// Append after a successful creation call.
    pub fn add_workspace(&mut self, workspace: Workspace) {
        self.workspaces.push(workspace);
    }

    /// Merge a partial update into the list entry and, when the id
    /// matches the active workspace, into `current` as well. The one
    /// place two pieces of state are kept consistent with each other.
    pub fn update_workspace(&mut self, id: &str, update: &WorkspaceUpdate) {
        if let Some(entry) = self.workspaces.iter_mut().find(|workspace| workspace.id == id) {
            apply(entry, update);
        }
        if let Some(current) = self.current.as_mut() {
            if current.id == id {
                apply(current, update);
            }
        }
    }

    /// The auto-select-first step every cold start performs when no
    /// workspace was chosen explicitly.
    pub fn select_first_if_unset(&mut self) {
        if self.current.is_none() {
            self.current = self.workspaces.first().cloned();
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|workspace| workspace.id == id)
    }
}

fn apply(workspace: &mut Workspace, update: &WorkspaceUpdate) {
    if let Some(name) = &update.name {
        workspace.name = name.clone();
    }
    if let Some(description) = &update.description {
        workspace.description = Some(description.clone());
    }
}
