use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

/// Minimal reference to a tracking-service entity, as embedded in filter
/// values (`{"id": .., "type": ..}`).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id, kind: None }
    }

    pub fn with_kind(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: Some(kind.into()),
        }
    }
}

/// Interactive credentials for a transfer backend. Held only for the
/// duration of the call that obtained them.
#[derive(Clone, Eq, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// A `HumanUser` row, matched against the transfer-backend username.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrackedUser {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "sg_server_username", default)]
    pub server_username: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
}

impl TrackedUser {
    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::with_kind(self.id, self.kind.clone())
    }
}

/// A `Task` row as returned by the assigned-tasks query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub task_assignees: Vec<EntityRef>,
    #[serde(rename = "sg_status_list", default)]
    pub status: Option<String>,
    #[serde(rename = "sg_fixes_by", default)]
    pub fixes_by: Vec<EntityRef>,
}

impl TaskRecord {
    pub fn involves(&self, user: &EntityRef) -> bool {
        self.task_assignees.iter().any(|assignee| assignee.id == user.id)
            || self.fixes_by.iter().any(|fixer| fixer.id == user.id)
    }
}
