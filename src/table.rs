//! Role definitions and the immutable role table
//!
//! The table is process-wide static configuration: built or loaded once at
//! startup, validated, then never mutated. Construction is the only
//! fallible path in the crate.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AccessError, Result};
use crate::role::Role;

/// Associates a role with its rank and explicit permission set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub id: Role,
    /// Strictly-ordered rank; higher ranks pass lower minimum-role checks
    pub level: u32,
    /// Dot-scoped permissions. Never inherited across levels; the wildcard
    /// `"*"` grants everything.
    #[serde(default)]
    pub permissions: HashSet<String>,
}

impl RoleDefinition {
    pub fn new(id: Role, level: u32, permissions: &[&str]) -> Self {
        Self {
            id,
            level,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// On-disk payload shape: `{ "roles": [ ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableConfig {
    roles: Vec<RoleDefinition>,
}

/// Immutable `Role -> RoleDefinition` mapping
#[derive(Debug, Clone)]
pub struct RoleTable {
    defs: HashMap<Role, RoleDefinition>,
}

impl RoleTable {
    /// Build and validate a table.
    ///
    /// Duplicate role ids and duplicate levels are rejected; a table may
    /// omit roles, and lookups against omitted roles deny.
    pub fn new(defs: Vec<RoleDefinition>) -> Result<Self> {
        let mut map = HashMap::with_capacity(defs.len());
        let mut levels = HashSet::with_capacity(defs.len());
        for def in defs {
            if map.contains_key(&def.id) {
                return Err(AccessError::InvalidTable(format!("duplicate role {}", def.id)));
            }
            if !levels.insert(def.level) {
                return Err(AccessError::InvalidTable(format!(
                    "duplicate level {} on {}",
                    def.level, def.id
                )));
            }
            debug!(role = %def.id, level = def.level, permissions = def.permissions.len(), "registered role");
            map.insert(def.id, def);
        }
        info!(roles = map.len(), "role table loaded");
        Ok(Self { defs: map })
    }

    /// Parse and validate a JSON config payload
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: TableConfig = serde_json::from_str(payload)?;
        Self::new(config.roles)
    }

    /// Load and validate a JSON config file
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Serialize back to the config payload shape, definitions in
    /// descending rank order
    pub fn to_json(&self) -> Result<String> {
        let config = TableConfig {
            roles: self.roles().into_iter().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&config)?)
    }

    pub fn get(&self, role: Role) -> Option<&RoleDefinition> {
        self.defs.get(&role)
    }

    /// Rank of a role, if this table defines it
    pub fn level(&self, role: Role) -> Option<u32> {
        self.defs.get(&role).map(|d| d.level)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// All definitions in descending rank order
    pub fn roles(&self) -> Vec<&RoleDefinition> {
        let mut defs: Vec<_> = self.defs.values().collect();
        defs.sort_by(|a, b| b.level.cmp(&a.level));
        defs
    }
}
