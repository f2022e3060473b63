//! ARM resource group payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `Microsoft.Resources/resourceGroups` as sent to and returned by ARM.
///
/// Only `location` and `tags` are written, the rest is read-only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResourceGroup {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
    pub location: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default, skip_serializing)]
    pub properties: Option<ResourceGroupProperties>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupProperties {
    pub provisioning_state: Option<String>,
}

impl ResourceGroup {
    pub fn new(location: &str, tags: BTreeMap<String, String>) -> ResourceGroup {
        ResourceGroup {
            location: location.to_string(),
            tags,
            ..Default::default()
        }
    }
}
