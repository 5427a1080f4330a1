//! The platform's standard role table

use crate::constants::*;
use crate::role::Role;
use crate::table::{RoleDefinition, RoleTable};

/// Build the standard eight-role table.
///
/// Super-admin holds the wildcard; every other role carries an explicit
/// permission set. Levels descend in steps so later roles can slot
/// between existing ranks.
pub fn default_table() -> RoleTable {
    let defs = vec![
        RoleDefinition::new(Role::SuperAdmin, 100, &[WILDCARD]),
        RoleDefinition::new(
            Role::Admin,
            90,
            &[
                DASHBOARD_VIEW,
                MEMBERS_VIEW,
                MEMBERS_CREATE,
                MEMBERS_EDIT,
                MEMBERS_DELETE,
                BRANCHES_VIEW,
                BRANCHES_CREATE,
                BRANCHES_EDIT,
                BRANCHES_DELETE,
                VOWS_VIEW,
                VOWS_RECORD,
                VOWS_EDIT,
                VOWS_DELETE,
                USERS_VIEW,
                USERS_MANAGE,
                FINANCE_VIEW,
                REPORTS_VIEW,
                SETTINGS_MANAGE,
            ],
        ),
        RoleDefinition::new(
            Role::BranchAdmin,
            80,
            &[
                DASHBOARD_VIEW,
                MEMBERS_VIEW,
                MEMBERS_CREATE,
                MEMBERS_EDIT,
                BRANCHES_VIEW,
                VOWS_VIEW,
                VOWS_RECORD,
                VOWS_EDIT,
                USERS_VIEW,
                REPORTS_VIEW,
            ],
        ),
        RoleDefinition::new(
            Role::FinancialController,
            70,
            &[DASHBOARD_VIEW, FINANCE_VIEW, FINANCE_RECONCILE, VOWS_VIEW, REPORTS_VIEW],
        ),
        RoleDefinition::new(
            Role::UnitLeader,
            60,
            &[DASHBOARD_VIEW, MEMBERS_VIEW, VOWS_VIEW, REPORTS_VIEW],
        ),
        RoleDefinition::new(
            Role::Staff,
            50,
            &[DASHBOARD_VIEW, MEMBERS_VIEW, MEMBERS_EDIT, VOWS_VIEW, VOWS_RECORD],
        ),
        RoleDefinition::new(Role::DataEntry, 40, &[DASHBOARD_VIEW, MEMBERS_CREATE, VOWS_RECORD]),
        RoleDefinition::new(Role::Member, 10, &[DASHBOARD_VIEW]),
    ];
    RoleTable::new(defs).expect("builtin role table is valid")
}
