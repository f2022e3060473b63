//! ARM authorization payloads.

use serde::{Deserialize, Serialize};

/// Role definition as returned by the role definitions list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleDefinition {
    /// Full resource id, used as `roleDefinitionId` in assignments.
    pub id: String,
    pub name: String,
    pub properties: RoleDefinitionProperties,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinitionProperties {
    pub role_name: String,
    #[serde(default, rename = "type")]
    pub role_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RoleDefinitionList {
    #[serde(default)]
    pub value: Vec<RoleDefinition>,
}

/// Body of a role assignment PUT.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleAssignmentRequest {
    pub properties: RoleAssignmentProperties,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentProperties {
    pub role_definition_id: String,
    pub principal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Role assignment as returned by ARM.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleAssignment {
    pub id: String,
    pub name: String,
    pub properties: RoleAssignmentProperties,
}

impl RoleAssignmentRequest {
    pub fn new(role_definition_id: &str, principal_id: &str) -> RoleAssignmentRequest {
        RoleAssignmentRequest {
            properties: RoleAssignmentProperties {
                role_definition_id: role_definition_id.to_string(),
                principal_id: principal_id.to_string(),
                scope: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_definition_list() {
        let json = r#"{"value": [{
            "id": "/subscriptions/0000/providers/Microsoft.Authorization/roleDefinitions/b24988ac-6180-42a0-ab88-20f7382dd24c",
            "name": "b24988ac-6180-42a0-ab88-20f7382dd24c",
            "type": "Microsoft.Authorization/roleDefinitions",
            "properties": {"roleName": "Contributor", "type": "BuiltInRole", "permissions": []}
        }]}"#;
        let list: RoleDefinitionList = serde_json::from_str(json).unwrap();
        assert_eq!(list.value.len(), 1);
        assert_eq!(list.value[0].properties.role_name, "Contributor");
        assert_eq!(list.value[0].properties.role_type.as_deref(), Some("BuiltInRole"));
    }

    #[test]
    fn test_assignment_request_body() {
        let body = serde_json::to_value(RoleAssignmentRequest::new("/rd/1", "pid")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"properties": {"roleDefinitionId": "/rd/1", "principalId": "pid"}})
        );
    }
}
