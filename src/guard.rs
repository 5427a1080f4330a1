//! Route gating over the evaluator

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::eval::{AccessEvaluator, Restricted};
use crate::role::Role;
use crate::session::AuthState;

/// Declarative access requirements for one navigable route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRule {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<Role>,
}

impl RouteRule {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), required_permission: None, required_role: None }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.required_permission = Some(permission.into());
        self
    }

    pub fn with_minimum_role(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }
}

impl Restricted for RouteRule {
    fn required_permission(&self) -> Option<&str> {
        self.required_permission.as_deref()
    }

    fn required_role(&self) -> Option<Role> {
        self.required_role
    }
}

/// What the caller should do with the current navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Authentication still resolving; render a loading state
    Pending,
    Redirect(String),
}

/// Translates evaluator verdicts into navigation outcomes
#[derive(Debug, Clone)]
pub struct RouteGuard {
    evaluator: Arc<AccessEvaluator>,
    login_path: String,
    unauthorized_path: String,
}

impl RouteGuard {
    pub fn new(
        evaluator: Arc<AccessEvaluator>,
        login_path: impl Into<String>,
        unauthorized_path: impl Into<String>,
    ) -> Self {
        Self {
            evaluator,
            login_path: login_path.into(),
            unauthorized_path: unauthorized_path.into(),
        }
    }

    /// Decide the outcome for one route.
    ///
    /// Never makes an authorization decision while authentication is
    /// still resolving; anonymous visitors go to login, authenticated
    /// but unauthorized principals to the unauthorized destination.
    pub fn decide(&self, state: &AuthState, rule: &RouteRule) -> GuardDecision {
        match state {
            AuthState::Loading => GuardDecision::Pending,
            AuthState::Anonymous => GuardDecision::Redirect(self.login_path.clone()),
            AuthState::Authenticated(principal) => {
                if self.evaluator.is_authorized(principal.role, rule) {
                    GuardDecision::Allow
                } else {
                    GuardDecision::Redirect(self.unauthorized_path.clone())
                }
            }
        }
    }
}
