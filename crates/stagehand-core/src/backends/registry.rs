use std::collections::HashMap;
use std::sync::Arc;

use crate::backends::{LoginPrompt, TransferBackend};

/// Runtime set of transfer backends configured for a project, keyed by
/// backend name. The host may also register the login capability here; the
/// task-filter hook prefers it over its injected fallback.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn TransferBackend>>,
    login: Option<Arc<dyn LoginPrompt>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a backend under its own name, replacing any previous
    /// entry with that name.
    pub fn register(&mut self, backend: Arc<dyn TransferBackend>) {
        self.backends.insert(backend.name().to_string(), backend);
    }

    pub fn with_login_provider(mut self, login: Arc<dyn LoginPrompt>) -> Self {
        self.login = Some(login);
        self
    }

    pub fn set_login_provider(&mut self, login: Arc<dyn LoginPrompt>) {
        self.login = Some(login);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn TransferBackend>> {
        self.backends.get(name).cloned()
    }

    pub fn login_provider(&self) -> Option<Arc<dyn LoginPrompt>> {
        self.login.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.backends.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("BackendRegistry")
            .field("backends", &names)
            .field("has_login_provider", &self.login.is_some())
            .finish()
    }
}
