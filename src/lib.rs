//! Rolegate - role-based access control with a leveled role hierarchy
//!
//! A static role table maps each role to an integer rank and an explicit
//! set of dot-scoped permission strings (`resource.action`). The evaluator
//! answers two questions: "does role R hold permission P?" and "does role R
//! meet or exceed minimum role M?". Route guards, sessions and navigation
//! menus all consume the same evaluator through the `Restricted` trait.

pub mod bootstrap;
pub mod constants;
pub mod error;
pub mod eval;
pub mod guard;
pub mod nav;
pub mod role;
pub mod session;
pub mod table;

pub use bootstrap::default_table;
pub use constants::WILDCARD;
pub use error::{AccessError, Result};
pub use eval::{AccessEvaluator, Restricted};
pub use guard::{GuardDecision, RouteGuard, RouteRule};
pub use nav::{visible_items, NavItem};
pub use role::Role;
pub use session::{AuthSession, AuthState, Principal};
pub use table::{RoleDefinition, RoleTable};
