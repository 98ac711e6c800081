use std::sync::Arc;

use serde_json::Value;

use crate::models::{FilterClause, HookResult};

pub const HUMAN_USER_ENTITY: &str = "HumanUser";
pub const TASK_ENTITY: &str = "Task";

pub const PROJECT_FIELD: &str = "project";
pub const LOGIN_FIELD: &str = "login";
pub const CONTENT_FIELD: &str = "content";
pub const SERVER_USERNAME_FIELD: &str = "sg_server_username";
pub const STATUS_FIELD: &str = "sg_status_list";
pub const ASSIGNEES_FIELD: &str = "task_assignees";
pub const FIXES_BY_FIELD: &str = "sg_fixes_by";
pub const VERSION_NUMBER_FIELD: &str = "version_number";
pub const CREATED_AT_FIELD: &str = "created_at";

/// Fields requested when mapping a backend username to a `HumanUser` row.
pub const USER_FIELDS: &[&str] = &["id", "type", SERVER_USERNAME_FIELD, LOGIN_FIELD];

/// Fields requested for assigned-task rows.
pub const TASK_FIELDS: &[&str] = &[
    "id",
    "type",
    CONTENT_FIELD,
    ASSIGNEES_FIELD,
    STATUS_FIELD,
    FIXES_BY_FIELD,
];

/// Remote production-tracking query client. Rows come back as raw JSON
/// objects; callers decode them into typed records. Transport failures are
/// the client's to report as errors, an empty result is not one.
pub trait TrackingClient: Send + Sync {
    fn find_one(
        &self,
        entity: &str,
        filters: &[FilterClause],
        fields: &[&str],
    ) -> HookResult<Option<Value>>;

    fn find(
        &self,
        entity: &str,
        filters: &[FilterClause],
        fields: &[&str],
    ) -> HookResult<Vec<Value>>;
}

impl<T: TrackingClient + ?Sized> TrackingClient for Arc<T> {
    fn find_one(
        &self,
        entity: &str,
        filters: &[FilterClause],
        fields: &[&str],
    ) -> HookResult<Option<Value>> {
        self.as_ref().find_one(entity, filters, fields)
    }

    fn find(
        &self,
        entity: &str,
        filters: &[FilterClause],
        fields: &[&str],
    ) -> HookResult<Vec<Value>> {
        self.as_ref().find(entity, filters, fields)
    }
}
