use thiserror::Error;

pub type HookResult<T> = Result<T, HookError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HookErrorKind {
    BackendResolution,
    Login,
    TrackingQuery,
    InvalidRecord,
    Internal,
}

/// Collaborator failure surfaced to the host. "Succeeded but returned
/// nothing useful" is not an error; hooks report that as `Ok(None)`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct HookError {
    pub backend: Option<String>,
    pub kind: HookErrorKind,
    pub message: String,
}

impl HookError {
    pub fn new(kind: HookErrorKind, message: impl Into<String>) -> Self {
        Self {
            backend: None,
            kind,
            message: message.into(),
        }
    }

    pub fn for_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    pub fn backend_resolution(message: impl Into<String>) -> Self {
        Self::new(HookErrorKind::BackendResolution, message)
    }

    pub fn login(message: impl Into<String>) -> Self {
        Self::new(HookErrorKind::Login, message)
    }

    pub fn tracking_query(message: impl Into<String>) -> Self {
        Self::new(HookErrorKind::TrackingQuery, message)
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::new(HookErrorKind::InvalidRecord, message)
    }
}

impl From<serde_json::Error> for HookError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_record(format!("tracking record decode failure: {error}"))
    }
}
