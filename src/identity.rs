//! Identity collaborator
//!
//! Supplies the current user id, or signals that no user is present. The
//! engine consults this synchronously at the start of every operation; the
//! actual authentication provider lives outside this crate.

use uuid::Uuid;

/// Identity collaborator contract.
pub trait IdentityProvider: Send + Sync {
    /// The currently authenticated user, if any.
    fn current_user(&self) -> Option<Uuid>;
}

/// Identity pinned to a single user for the lifetime of the engine, the
/// usual shape for one authenticated session.
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    user_id: Uuid,
}

impl FixedIdentity {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

/// No user present; every engine call fails with `NotAuthenticated`.
#[derive(Debug, Clone, Default)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn current_user(&self) -> Option<Uuid> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_identity_returns_its_user() {
        let id = Uuid::new_v4();
        assert_eq!(FixedIdentity::new(id).current_user(), Some(id));
    }

    #[test]
    fn anonymous_has_no_user() {
        assert_eq!(Anonymous.current_user(), None);
    }
}
