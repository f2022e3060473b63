//! Role definition lookup and role assignment creation.

use super::{ArmClient, ArmError};
use crate::config::AUTHORIZATION_API_VERSION;
use crate::models::{RoleAssignment, RoleAssignmentRequest, RoleDefinition, RoleDefinitionList};
use reqwest::Method;
use uuid::Uuid;

#[allow(async_fn_in_trait)]
pub trait Authorization {
    /// First role definition visible at `scope` with this exact name.
    async fn find_role_definition(
        &self,
        scope: &str,
        role_name: &str,
    ) -> Result<Option<RoleDefinition>, ArmError>;

    /// `assignment_name` must be unique per assignment.
    async fn create_role_assignment(
        &self,
        scope: &str,
        assignment_name: Uuid,
        request: &RoleAssignmentRequest,
    ) -> Result<RoleAssignment, ArmError>;
}

/// OData filter on the role name, quotes doubled.
pub fn role_name_filter(role_name: &str) -> String {
    format!("roleName eq '{}'", role_name.replace('\'', "''"))
}

impl Authorization for ArmClient {
    async fn find_role_definition(
        &self,
        scope: &str,
        role_name: &str,
    ) -> Result<Option<RoleDefinition>, ArmError> {
        let url = self.url(&format!(
            "{scope}/providers/Microsoft.Authorization/roleDefinitions"
        ));
        let request = self
            .request(Method::GET, &url, AUTHORIZATION_API_VERSION)
            .await?
            .query(&[("$filter", role_name_filter(role_name))]);
        let response = self.send(&url, request).await?;
        let list: RoleDefinitionList = ArmClient::json(&url, response).await?;
        log::debug!("role '{role_name}' => {} definitions", list.value.len());
        Ok(list.value.into_iter().next())
    }

    async fn create_role_assignment(
        &self,
        scope: &str,
        assignment_name: Uuid,
        request: &RoleAssignmentRequest,
    ) -> Result<RoleAssignment, ArmError> {
        let url = self.url(&format!(
            "{scope}/providers/Microsoft.Authorization/roleAssignments/{assignment_name}"
        ));
        let builder = self
            .request(Method::PUT, &url, AUTHORIZATION_API_VERSION)
            .await?
            .json(request);
        let response = self.send(&url, builder).await?;
        ArmClient::json(&url, response).await
    }
}
