//! Reconciliation logic.
//!
//! - [`realm`] - pick the realms to process and join them with their subscription
//! - [`reconcile`] - create or update each resource group of a realm
//! - [`roles`] - role assignments for the admin groups of a resource group
//! - [`report`] - what a realm run changed

mod realm;
mod reconcile;
mod report;
mod roles;

pub use realm::select_realms;
pub use reconcile::{reconcile_realm, reconcile_resource_group};
pub use report::RealmReport;
pub use roles::assign_roles;
