//! Authenticated HTTP access to Azure Resource Manager.

use super::ArmError;
use crate::config;
use azure_core::auth::TokenCredential;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// How requests are authenticated.
#[derive(Clone)]
pub enum ArmAuth {
    /// Token credential, usually the default chain.
    Credential(Arc<dyn TokenCredential>),
    /// Pre-issued bearer token, e.g. from `az account get-access-token`.
    Token(String),
}

/// Credential from the default chain: environment, managed identity, Azure CLI.
pub fn default_credential() -> Result<Arc<dyn TokenCredential>, ArmError> {
    Ok(azure_identity::create_credential()?)
}

/// [`config::ACCESS_TOKEN_ENV`] when set, the default credential chain otherwise.
pub fn auth_from_env() -> Result<ArmAuth, ArmError> {
    match std::env::var(config::ACCESS_TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => {
            log::info!("Using bearer token from {}", config::ACCESS_TOKEN_ENV);
            Ok(ArmAuth::Token(token.trim().to_string()))
        }
        _ => Ok(ArmAuth::Credential(default_credential()?)),
    }
}

/// ARM endpoint, honouring the override environment variable.
pub fn arm_endpoint() -> String {
    std::env::var(config::ARM_ENDPOINT_ENV).unwrap_or_else(|_| config::ARM_ENDPOINT.to_string())
}

/// Resource id of a resource group, used as role assignment scope.
pub fn resource_group_scope(subscription_id: &str, name: &str) -> String {
    format!("/subscriptions/{subscription_id}/resourceGroups/{name}")
}

/// ARM client bound to one subscription.
pub struct ArmClient {
    http: Client,
    auth: ArmAuth,
    endpoint: String,
    subscription_id: String,
}

impl ArmClient {
    pub fn new(auth: ArmAuth, subscription_id: &str) -> Result<ArmClient, ArmError> {
        Self::with_endpoint(auth, subscription_id, &arm_endpoint())
    }

    pub fn with_endpoint(
        auth: ArmAuth,
        subscription_id: &str,
        endpoint: &str,
    ) -> Result<ArmClient, ArmError> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SEC))
            .build()
            .map_err(|source| ArmError::Http {
                url: endpoint.clone(),
                source,
            })?;
        Ok(ArmClient {
            http,
            auth,
            endpoint,
            subscription_id: subscription_id.to_string(),
        })
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Start a request with bearer token and api-version set.
    pub(super) async fn request(
        &self,
        method: Method,
        url: &str,
        api_version: &str,
    ) -> Result<RequestBuilder, ArmError> {
        let builder = self.http.request(method, url);
        let builder = match &self.auth {
            ArmAuth::Credential(credential) => {
                let token = credential.get_token(&[config::ARM_SCOPE]).await?;
                builder.bearer_auth(token.token.secret())
            }
            ArmAuth::Token(token) => builder.bearer_auth(token),
        };
        Ok(builder.query(&[("api-version", api_version)]))
    }

    /// Send and turn non-2xx answers into [`ArmError::Api`].
    pub(super) async fn send(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ArmError> {
        log::debug!("send {url}");
        let response = request.send().await.map_err(|source| ArmError::Http {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        log::debug!("{url} => {status}");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::trace!("error body from {url}: {body}");
        Err(ArmError::from_response(status.as_u16(), &body))
    }

    /// Decode a JSON body, reporting the failing field path.
    pub(super) async fn json<T: DeserializeOwned>(
        url: &str,
        response: Response,
    ) -> Result<T, ArmError> {
        let body = response.text().await.map_err(|source| ArmError::Http {
            url: url.to_string(),
            source,
        })?;
        let mut deserializer = serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", body);
            ArmError::Parse {
                url: url.to_string(),
                path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })
    }
}
