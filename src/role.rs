//! Canonical role enumeration and the normalization boundary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// The single identity classification assigned to an authenticated principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    Admin,
    BranchAdmin,
    FinancialController,
    UnitLeader,
    Staff,
    DataEntry,
    Member,
}

impl Role {
    /// Every role, in descending default rank order
    pub const ALL: [Role; 8] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::BranchAdmin,
        Role::FinancialController,
        Role::UnitLeader,
        Role::Staff,
        Role::DataEntry,
        Role::Member,
    ];

    /// Canonical kebab-case form, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::Admin => "admin",
            Role::BranchAdmin => "branch-admin",
            Role::FinancialController => "financial-controller",
            Role::UnitLeader => "unit-leader",
            Role::Staff => "staff",
            Role::DataEntry => "data-entry",
            Role::Member => "member",
        }
    }

    /// Normalize a role string at the authentication boundary.
    ///
    /// Accepts kebab-case, snake_case and any casing of the same logical
    /// role. Unknown spellings return `None` so callers deny access
    /// instead of guessing.
    pub fn normalize(s: &str) -> Option<Role> {
        let canonical = s.trim().to_ascii_lowercase().replace('_', "-");
        Role::ALL.iter().copied().find(|r| r.as_str() == canonical)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::normalize(s).ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}
