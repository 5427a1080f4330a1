//! The access evaluator: pure authorization predicates over a role table

use crate::constants::WILDCARD;
use crate::role::Role;
use crate::table::RoleTable;

/// A descriptor that may declare a required permission and/or minimum role
pub trait Restricted {
    fn required_permission(&self) -> Option<&str>;
    fn required_role(&self) -> Option<Role>;
}

/// Side-effect-free authorization predicates over an injected table.
///
/// Every check fails closed: a role the table does not define never
/// grants access. The evaluator holds no mutable state and can be shared
/// across threads freely.
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    table: RoleTable,
}

impl AccessEvaluator {
    pub fn new(table: RoleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RoleTable {
        &self.table
    }

    /// Does `role` hold `permission`?
    ///
    /// The wildcard grants every permission string, empty and malformed
    /// included; otherwise exact set membership decides. No prefix or
    /// glob matching.
    #[inline]
    pub fn has_permission(&self, role: Role, permission: &str) -> bool {
        match self.table.get(role) {
            Some(def) => def.permissions.contains(WILDCARD) || def.permissions.contains(permission),
            None => false,
        }
    }

    /// Does `role` rank at or above `minimum`?
    ///
    /// Rank is independent of permission sets: any role at or above the
    /// required level passes, whatever permissions it enumerates.
    #[inline]
    pub fn has_role(&self, role: Role, minimum: Role) -> bool {
        match (self.table.level(role), self.table.level(minimum)) {
            (Some(have), Some(need)) => have >= need,
            _ => false,
        }
    }

    /// Is `role` allowed past `item`'s constraints?
    ///
    /// A declared permission is checked before a declared minimum role;
    /// an unconstrained item is always allowed.
    pub fn is_authorized<T: Restricted>(&self, role: Role, item: &T) -> bool {
        match (item.required_permission(), item.required_role()) {
            (Some(permission), _) => self.has_permission(role, permission),
            (None, Some(minimum)) => self.has_role(role, minimum),
            (None, None) => true,
        }
    }

    /// Order-preserving filter of `items` down to what `role` may see
    pub fn filter_authorized<'a, T: Restricted>(&self, role: Role, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.is_authorized(role, *item)).collect()
    }
}
