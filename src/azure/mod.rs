//! Azure Resource Manager access.
//!
//! This module handles all Azure-related operations:
//! - [`client`] - authenticated REST client bound to a subscription
//! - [`resource_groups`] - check / get / create-or-update resource groups
//! - [`authorization`] - role definition lookup and role assignments
//! - [`cache`] - per-realm role definition id cache

mod authorization;
mod cache;
mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod resource_groups;

// Re-export public types and functions
pub use authorization::{role_name_filter, Authorization};
pub use cache::RoleDefinitionCache;
pub use client::{
    arm_endpoint, auth_from_env, default_credential, resource_group_scope, ArmAuth, ArmClient,
};
pub use error::ArmError;
pub use resource_groups::ResourceGroups;
