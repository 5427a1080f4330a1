//! Principal and session-bound convenience checks
//!
//! Authentication itself lives outside this crate; the session only
//! carries the resolved principal and binds it to the shared evaluator.

use std::sync::Arc;

use crate::eval::AccessEvaluator;
use crate::role::Role;

/// An authenticated identity, supplied by the authentication layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub role: Role,
}

impl Principal {
    pub fn new(subject: impl Into<String>, role: Role) -> Self {
        Self { subject: subject.into(), role }
    }
}

/// Where authentication currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Still resolving; no authorization decision may be made yet
    Loading,
    Anonymous,
    Authenticated(Principal),
}

/// Per-session facade binding a principal to the shared evaluator.
///
/// All checks fail closed while the state is `Loading` or `Anonymous`.
#[derive(Debug, Clone)]
pub struct AuthSession {
    evaluator: Arc<AccessEvaluator>,
    state: AuthState,
}

impl AuthSession {
    /// New session, starting in the `Loading` state
    pub fn new(evaluator: Arc<AccessEvaluator>) -> Self {
        Self { evaluator, state: AuthState::Loading }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    pub fn principal(&self) -> Option<&Principal> {
        match &self.state {
            AuthState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    /// Attach the principal resolved by the authentication layer
    pub fn login(&mut self, principal: Principal) {
        self.state = AuthState::Authenticated(principal);
    }

    pub fn logout(&mut self) {
        self.state = AuthState::Anonymous;
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.principal()
            .map(|p| self.evaluator.has_permission(p.role, permission))
            .unwrap_or(false)
    }

    pub fn has_role(&self, minimum: Role) -> bool {
        self.principal()
            .map(|p| self.evaluator.has_role(p.role, minimum))
            .unwrap_or(false)
    }
}
