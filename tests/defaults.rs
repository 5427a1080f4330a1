//! Builtin role table sanity tests

use rolegate::constants::*;
use rolegate::{default_table, AccessEvaluator, Role};

fn eval() -> AccessEvaluator {
    AccessEvaluator::new(default_table())
}

/// Verify every enum role has a definition in the builtin table
#[test]
fn table_is_total_over_the_enum() {
    let table = default_table();
    assert_eq!(table.len(), Role::ALL.len());
    for role in Role::ALL {
        assert!(table.get(role).is_some(), "{role} missing");
    }
}

/// Verify ranks strictly descend in enum order
#[test]
fn ranks_strictly_descend() {
    let table = default_table();
    let levels: Vec<u32> = Role::ALL.iter().map(|&r| table.level(r).unwrap()).collect();
    for pair in levels.windows(2) {
        assert!(pair[0] > pair[1], "ranks out of order: {pair:?}");
    }
}

/// Verify super-admin holds the wildcard and nothing is out of its reach
#[test]
fn super_admin_holds_wildcard() {
    let eval = eval();
    assert!(eval.has_permission(Role::SuperAdmin, "anything.random"));
    assert!(eval.has_permission(Role::SuperAdmin, SETTINGS_MANAGE));
    for role in Role::ALL {
        assert!(eval.has_role(Role::SuperAdmin, role));
    }
}

/// Verify the admin set is explicit, not the wildcard
#[test]
fn admin_set_is_explicit() {
    let eval = eval();
    assert!(eval.has_permission(Role::Admin, USERS_MANAGE));
    assert!(eval.has_permission(Role::Admin, SETTINGS_MANAGE));
    assert!(!eval.has_permission(Role::Admin, "anything.random"));
    assert!(!eval.has_permission(Role::Admin, FINANCE_RECONCILE));
}

/// Verify the finance role sees books but not member administration
#[test]
fn financial_controller_scope() {
    let eval = eval();
    assert!(eval.has_permission(Role::FinancialController, FINANCE_VIEW));
    assert!(eval.has_permission(Role::FinancialController, FINANCE_RECONCILE));
    assert!(!eval.has_permission(Role::FinancialController, MEMBERS_EDIT));
    assert!(!eval.has_permission(Role::FinancialController, USERS_VIEW));
}

/// Verify data entry can record but not review
#[test]
fn data_entry_scope() {
    let eval = eval();
    assert!(eval.has_permission(Role::DataEntry, MEMBERS_CREATE));
    assert!(eval.has_permission(Role::DataEntry, VOWS_RECORD));
    assert!(!eval.has_permission(Role::DataEntry, MEMBERS_VIEW));
    assert!(!eval.has_permission(Role::DataEntry, REPORTS_VIEW));
}

/// Verify ordinary members only reach the dashboard
#[test]
fn member_scope() {
    let eval = eval();
    assert!(eval.has_permission(Role::Member, DASHBOARD_VIEW));
    assert!(!eval.has_permission(Role::Member, MEMBERS_VIEW));
    assert!(!eval.has_permission(Role::Member, FINANCE_VIEW));
    for role in Role::ALL {
        if role != Role::Member {
            assert!(!eval.has_role(Role::Member, role), "member outranks {role}");
        }
    }
}

/// Verify branch admins manage their flock but not global settings
#[test]
fn branch_admin_scope() {
    let eval = eval();
    assert!(eval.has_permission(Role::BranchAdmin, MEMBERS_EDIT));
    assert!(eval.has_permission(Role::BranchAdmin, VOWS_EDIT));
    assert!(!eval.has_permission(Role::BranchAdmin, MEMBERS_DELETE));
    assert!(!eval.has_permission(Role::BranchAdmin, SETTINGS_MANAGE));
    assert!(!eval.has_permission(Role::BranchAdmin, USERS_MANAGE));
}
