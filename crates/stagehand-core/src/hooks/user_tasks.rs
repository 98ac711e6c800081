use std::cell::OnceCell;
use std::sync::Arc;

use serde_json::json;

use crate::backends::{BackendRegistry, BackendResolver, LoginPrompt, ResolvedBackend};
use crate::models::{
    Context, Credentials, FilterClause, FilterOp, HookResult, TaskRecord, TrackedUser,
};
use crate::tracking::{
    ASSIGNEES_FIELD, FIXES_BY_FIELD, HUMAN_USER_ENTITY, PROJECT_FIELD, SERVER_USERNAME_FIELD,
    STATUS_FIELD, TASK_ENTITY, TASK_FIELDS, TrackingClient, USER_FIELDS,
};

/// Terminal or inactive statuses. Tasks in any of these are never offered
/// to the current user.
pub const EXCLUDED_TASK_STATUSES: &[&str] =
    &["na", "wtg", "hld", "mfwd", "sftapp", "snt", "apr", "cbb"];

/// Finds the tracking-service tasks assigned to (or flagged as fixed-by)
/// the current interactive user.
///
/// The pipeline is resolve backend, authenticate, map to a tracking user,
/// query tasks; every stage short-circuits to `Ok(None)` (or an empty
/// filter list) with a log line when it comes back empty. `Err` is
/// reserved for collaborator failures and propagates unmodified.
///
/// Backend collection runs at most once per instance, whatever its
/// outcome. The instance is not `Sync`; one hook instance serves one call
/// context.
pub struct UserTaskFilter<R: BackendResolver, T: TrackingClient> {
    context: Context,
    resolver: R,
    tracking: T,
    login_fallback: Arc<dyn LoginPrompt>,
    available_backends: OnceCell<HookResult<BackendRegistry>>,
}

impl<R: BackendResolver, T: TrackingClient> UserTaskFilter<R, T> {
    pub fn new(
        context: Context,
        resolver: R,
        tracking: T,
        login_fallback: Arc<dyn LoginPrompt>,
    ) -> Self {
        Self {
            context,
            resolver,
            tracking,
            login_fallback,
            available_backends: OnceCell::new(),
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    fn available_backends(&self) -> HookResult<&BackendRegistry> {
        let collected = self
            .available_backends
            .get_or_init(|| self.resolver.collect_backends());
        match collected {
            Ok(registry) => Ok(registry),
            Err(error) => Err(error.clone()),
        }
    }

    /// Determines the transfer backend governing the active project,
    /// applying per-project and per-user overrides through the resolver.
    pub fn resolve_project_backend(&self) -> HookResult<Option<ResolvedBackend>> {
        let available = self.available_backends()?;
        if available.is_empty() {
            tracing::warn!("could not collect any transfer backends for the active project");
            return Ok(None);
        }

        let resolved = self.resolver.resolve_project_transfer_backend(available)?;
        if resolved.is_none() {
            tracing::warn!("no transfer backend override or project default resolved");
        }
        Ok(resolved)
    }

    /// Retargets the resolved backend and runs the interactive login flow
    /// against it. Blocks until the user submits or cancels.
    pub fn current_user_credentials(&self) -> HookResult<Option<Credentials>> {
        let Some(resolved) = self.resolve_project_backend()? else {
            return Ok(None);
        };

        let available = self.available_backends()?;
        let Some(backend) = available.get(&resolved.name) else {
            tracing::error!(
                backend = %resolved.name,
                "resolved transfer backend is not registered"
            );
            return Ok(None);
        };

        backend.set_remote_host(&resolved.domain);
        backend.set_remote_root(&resolved.root);

        let login = available
            .login_provider()
            .unwrap_or_else(|| Arc::clone(&self.login_fallback));

        let label = resolved.name.to_uppercase();
        let message = format!("Type credentials for {}", resolved.domain);
        let validate = |candidate: &Credentials| backend.test_credentials(candidate);

        let credentials = login.login(&label, &message, &validate)?;
        if credentials.is_none() {
            tracing::error!("failed to get proper user credentials for {label}");
        }
        Ok(credentials)
    }

    /// Maps the authenticated backend username to its `HumanUser` row.
    pub fn current_tracking_user(&self) -> HookResult<Option<TrackedUser>> {
        let Some(credentials) = self.current_user_credentials()? else {
            tracing::warn!("could not get user credentials");
            return Ok(None);
        };

        let username = credentials.username;
        if username.is_empty() {
            tracing::warn!("transfer backend credentials carry no user name");
            return Ok(None);
        }
        tracing::info!(user = %username, "resolved transfer backend user");

        let filters = [FilterClause::condition(
            SERVER_USERNAME_FIELD,
            FilterOp::Is,
            json!(username.clone()),
        )];
        let Some(row) = self
            .tracking
            .find_one(HUMAN_USER_ENTITY, &filters, USER_FIELDS)?
        else {
            tracing::warn!(
                user = %username,
                "no tracking user matches the backend username"
            );
            return Ok(None);
        };

        Ok(Some(serde_json::from_value(row)?))
    }

    /// Builds the filter list selecting the current user's open tasks in
    /// the active project. Empty when the user could not be resolved.
    pub fn my_tasks_filters(&self) -> HookResult<Vec<FilterClause>> {
        let Some(user) = self.current_tracking_user()? else {
            tracing::warn!("could not resolve the current tracking user");
            return Ok(Vec::new());
        };

        let user_ref = serde_json::to_value(user.entity_ref())?;
        let project = serde_json::to_value(&self.context.project)?;

        Ok(vec![
            FilterClause::condition(PROJECT_FIELD, FilterOp::Is, project),
            FilterClause::condition(STATUS_FIELD, FilterOp::NotIn, json!(EXCLUDED_TASK_STATUSES)),
            FilterClause::any(vec![
                FilterClause::condition(ASSIGNEES_FIELD, FilterOp::Is, user_ref.clone()),
                FilterClause::condition(FIXES_BY_FIELD, FilterOp::Is, user_ref),
            ]),
        ])
    }

    /// Runs the assigned-tasks query. `Ok(None)` covers both an
    /// unresolved user and an empty result set.
    pub fn find_user_assigned_tasks(&self) -> HookResult<Option<Vec<TaskRecord>>> {
        let filters = self.my_tasks_filters()?;
        if filters.is_empty() {
            // an unfiltered find would fetch every task in the site
            return Ok(None);
        }

        let rows = self.tracking.find(TASK_ENTITY, &filters, TASK_FIELDS)?;
        if rows.is_empty() {
            return Ok(None);
        }

        let tasks = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<TaskRecord>, _>>()?;
        Ok(Some(tasks))
    }
}
