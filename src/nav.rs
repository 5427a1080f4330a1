//! Navigation menu entries filtered per principal

use serde::{Deserialize, Serialize};

use crate::eval::{AccessEvaluator, Restricted};
use crate::role::Role;

/// One sidebar or menu entry with optional access constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
            permission: None,
            role: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn with_minimum_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

impl Restricted for NavItem {
    fn required_permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    fn required_role(&self) -> Option<Role> {
        self.role
    }
}

/// The ordered subset of `items` that `role` may see
pub fn visible_items<'a>(
    evaluator: &AccessEvaluator,
    role: Role,
    items: &'a [NavItem],
) -> Vec<&'a NavItem> {
    evaluator.filter_authorized(role, items)
}
