//! Resource group operations.

use super::{ArmClient, ArmError};
use crate::config::RESOURCE_GROUPS_API_VERSION;
use crate::models::ResourceGroup;
use reqwest::Method;

#[allow(async_fn_in_trait)]
pub trait ResourceGroups {
    async fn check_existence(&self, name: &str) -> Result<bool, ArmError>;

    async fn get(&self, name: &str) -> Result<ResourceGroup, ArmError>;

    /// Create the group or replace its tags. ARM rejects a location change.
    async fn create_or_update(
        &self,
        name: &str,
        group: &ResourceGroup,
    ) -> Result<ResourceGroup, ArmError>;
}

impl ArmClient {
    fn resource_group_url(&self, name: &str) -> String {
        self.url(&format!(
            "/subscriptions/{}/resourcegroups/{name}",
            self.subscription_id()
        ))
    }
}

impl ResourceGroups for ArmClient {
    async fn check_existence(&self, name: &str) -> Result<bool, ArmError> {
        let url = self.resource_group_url(name);
        let request = self
            .request(Method::HEAD, &url, RESOURCE_GROUPS_API_VERSION)
            .await?;
        match self.send(&url, request).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn get(&self, name: &str) -> Result<ResourceGroup, ArmError> {
        let url = self.resource_group_url(name);
        let request = self
            .request(Method::GET, &url, RESOURCE_GROUPS_API_VERSION)
            .await?;
        let response = self.send(&url, request).await?;
        ArmClient::json(&url, response).await
    }

    async fn create_or_update(
        &self,
        name: &str,
        group: &ResourceGroup,
    ) -> Result<ResourceGroup, ArmError> {
        let url = self.resource_group_url(name);
        let request = self
            .request(Method::PUT, &url, RESOURCE_GROUPS_API_VERSION)
            .await?
            .json(group);
        let response = self.send(&url, request).await?;
        ArmClient::json(&url, response).await
    }
}
