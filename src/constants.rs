//! Permission vocabulary

/// Grants every permission unconditionally when present in a role's set
pub const WILDCARD: &str = "*";

// Member administration
pub const MEMBERS_VIEW: &str = "members.view";
pub const MEMBERS_CREATE: &str = "members.create";
pub const MEMBERS_EDIT: &str = "members.edit";
pub const MEMBERS_DELETE: &str = "members.delete";

// Branch administration
pub const BRANCHES_VIEW: &str = "branches.view";
pub const BRANCHES_CREATE: &str = "branches.create";
pub const BRANCHES_EDIT: &str = "branches.edit";
pub const BRANCHES_DELETE: &str = "branches.delete";

// Vow records
pub const VOWS_VIEW: &str = "vows.view";
pub const VOWS_RECORD: &str = "vows.record";
pub const VOWS_EDIT: &str = "vows.edit";
pub const VOWS_DELETE: &str = "vows.delete";

// User accounts
pub const USERS_VIEW: &str = "users.view";
pub const USERS_MANAGE: &str = "users.manage";

// Finance
pub const FINANCE_VIEW: &str = "finance.view";
pub const FINANCE_RECONCILE: &str = "finance.reconcile";

// Reporting and shell
pub const DASHBOARD_VIEW: &str = "dashboard.view";
pub const REPORTS_VIEW: &str = "reports.view";
pub const SETTINGS_MANAGE: &str = "settings.manage";
