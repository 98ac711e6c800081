use crate::backends::BackendRegistry;
use crate::models::HookResult;

/// Backend choice for the active project after override resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedBackend {
    pub name: String,
    pub domain: String,
    pub root: String,
}

impl ResolvedBackend {
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        root: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            root: root.into(),
        }
    }
}

/// Host capability that evaluates the project configuration: which
/// transfer backends exist, and which one governs the active project once
/// per-project and per-user overrides are applied.
pub trait BackendResolver: Send + Sync {
    fn collect_backends(&self) -> HookResult<BackendRegistry>;

    /// Resolves overrides against the collected set, falling back to the
    /// project default. `Ok(None)` means no backend could be determined.
    fn resolve_project_transfer_backend(
        &self,
        available: &BackendRegistry,
    ) -> HookResult<Option<ResolvedBackend>>;
}
