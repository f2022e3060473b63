//! Data models for resource group provisioning.
//!
//! - [`config`] - team and common YAML configuration
//! - [`realm`] - a realm resolved against its subscription
//! - [`resource_group`] - ARM resource group payloads
//! - [`role`] - ARM role definition and role assignment payloads

mod config;
mod realm;
mod resource_group;
mod role;

pub use config::{CommonConfig, ResourceGroupEntry, RoleBinding, Subscription, TeamConfig};
pub use realm::Realm;
pub use resource_group::{ResourceGroup, ResourceGroupProperties};
pub use role::{
    RoleAssignment, RoleAssignmentProperties, RoleAssignmentRequest, RoleDefinition,
    RoleDefinitionList, RoleDefinitionProperties,
};
