//! In-memory ARM used by the unit tests.

use super::{resource_group_scope, ArmError, Authorization, ResourceGroups};
use crate::models::{
    ResourceGroup, ResourceGroupProperties, RoleAssignment, RoleAssignmentProperties,
    RoleAssignmentRequest, RoleDefinition, RoleDefinitionProperties,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

#[derive(Default)]
pub struct MockArm {
    subscription_id: String,
    groups: RefCell<BTreeMap<String, ResourceGroup>>,
    roles: BTreeMap<String, String>,
    /// (scope, role definition id, principal id)
    assignments: RefCell<BTreeSet<(String, String, String)>>,
    forbidden_principals: BTreeSet<String>,
    calls: RefCell<Vec<String>>,
}

impl MockArm {
    pub fn new(subscription_id: &str) -> MockArm {
        MockArm {
            subscription_id: subscription_id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_group(self, name: &str, location: &str, tags: &[(&str, &str)]) -> MockArm {
        let tags = tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let group = self.stored(name, ResourceGroup::new(location, tags));
        self.groups.borrow_mut().insert(name.to_lowercase(), group);
        self
    }

    pub fn with_role(mut self, name: &str, id: &str) -> MockArm {
        self.roles.insert(name.to_string(), id.to_string());
        self
    }

    pub fn with_assignment(self, scope: &str, role_definition_id: &str, principal: &str) -> MockArm {
        self.assignments.borrow_mut().insert((
            scope.to_string(),
            role_definition_id.to_string(),
            principal.to_string(),
        ));
        self
    }

    /// Assignments for this principal fail with 403.
    pub fn with_forbidden_principal(mut self, principal: &str) -> MockArm {
        self.forbidden_principals.insert(principal.to_string());
        self
    }

    pub fn group(&self, name: &str) -> Option<ResourceGroup> {
        self.groups.borrow().get(&name.to_lowercase()).cloned()
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.borrow().len()
    }

    pub fn has_assignment(&self, scope: &str, role_definition_id: &str, principal: &str) -> bool {
        self.assignments.borrow().contains(&(
            scope.to_string(),
            role_definition_id.to_string(),
            principal.to_string(),
        ))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn stored(&self, name: &str, mut group: ResourceGroup) -> ResourceGroup {
        group.id = Some(resource_group_scope(&self.subscription_id, name));
        group.name = Some(name.to_string());
        group.properties = Some(ResourceGroupProperties {
            provisioning_state: Some("Succeeded".to_string()),
        });
        group
    }
}

fn api_error(status: u16, code: &str, message: &str) -> ArmError {
    ArmError::Api {
        status,
        code: code.to_string(),
        message: message.to_string(),
    }
}

impl ResourceGroups for MockArm {
    async fn check_existence(&self, name: &str) -> Result<bool, ArmError> {
        self.record(format!("exists {name}"));
        Ok(self.groups.borrow().contains_key(&name.to_lowercase()))
    }

    async fn get(&self, name: &str) -> Result<ResourceGroup, ArmError> {
        self.record(format!("get {name}"));
        self.group(name).ok_or_else(|| {
            api_error(
                404,
                "ResourceGroupNotFound",
                &format!("Resource group '{name}' could not be found."),
            )
        })
    }

    async fn create_or_update(
        &self,
        name: &str,
        group: &ResourceGroup,
    ) -> Result<ResourceGroup, ArmError> {
        self.record(format!("put {name} {}", group.location));
        if let Some(existing) = self.group(name) {
            if existing.location != group.location {
                return Err(api_error(
                    409,
                    "InvalidResourceGroupLocation",
                    "Invalid resource group location.",
                ));
            }
        }
        let stored = self.stored(name, group.clone());
        self.groups
            .borrow_mut()
            .insert(name.to_lowercase(), stored.clone());
        Ok(stored)
    }
}

impl Authorization for MockArm {
    async fn find_role_definition(
        &self,
        scope: &str,
        role_name: &str,
    ) -> Result<Option<RoleDefinition>, ArmError> {
        self.record(format!("role_definitions {scope} {role_name}"));
        Ok(self.roles.get(role_name).map(|id| RoleDefinition {
            id: id.clone(),
            name: id.rsplit('/').next().unwrap_or_default().to_string(),
            properties: RoleDefinitionProperties {
                role_name: role_name.to_string(),
                role_type: Some("BuiltInRole".to_string()),
            },
        }))
    }

    async fn create_role_assignment(
        &self,
        scope: &str,
        assignment_name: Uuid,
        request: &RoleAssignmentRequest,
    ) -> Result<RoleAssignment, ArmError> {
        let principal = &request.properties.principal_id;
        let role = &request.properties.role_definition_id;
        self.record(format!("assign {scope} {role} {principal}"));

        if self.forbidden_principals.contains(principal) {
            return Err(api_error(
                403,
                "AuthorizationFailed",
                "The client does not have authorization to perform action.",
            ));
        }
        let key = (scope.to_string(), role.clone(), principal.clone());
        if !self.assignments.borrow_mut().insert(key) {
            return Err(api_error(
                409,
                "RoleAssignmentExists",
                "The role assignment already exists.",
            ));
        }
        Ok(RoleAssignment {
            id: format!(
                "{scope}/providers/Microsoft.Authorization/roleAssignments/{assignment_name}"
            ),
            name: assignment_name.to_string(),
            properties: RoleAssignmentProperties {
                role_definition_id: role.clone(),
                principal_id: principal.clone(),
                scope: Some(scope.to_string()),
            },
        })
    }
}
