use crate::models::{Credentials, HookResult};

/// Interactive login capability supplied by the host UI layer.
pub trait LoginPrompt: Send + Sync {
    /// Prompts for credentials under the given domain label, blocking the
    /// calling thread until the user submits or cancels. `validate` is
    /// consulted before a submission is accepted; `Ok(None)` means the
    /// prompt was cancelled or gave up.
    fn login(
        &self,
        domain_label: &str,
        message: &str,
        validate: &dyn Fn(&Credentials) -> bool,
    ) -> HookResult<Option<Credentials>>;
}
