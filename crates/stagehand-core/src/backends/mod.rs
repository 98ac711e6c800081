pub mod login;
pub mod registry;
pub mod resolver;

pub use login::LoginPrompt;
pub use registry::BackendRegistry;
pub use resolver::{BackendResolver, ResolvedBackend};

use crate::models::Credentials;

/// A pluggable remote-host adapter used for authenticating production
/// users. `set_remote_host`/`set_remote_root` retarget the backend; the
/// host and root become its active transfer target.
pub trait TransferBackend: Send + Sync {
    fn name(&self) -> &str;

    fn set_remote_host(&self, domain: &str);

    fn set_remote_root(&self, root: &str);

    /// Validates a candidate login against the configured target without
    /// retaining it.
    fn test_credentials(&self, candidate: &Credentials) -> bool;
}
