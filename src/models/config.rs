//! YAML configuration model.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Team configuration, `rgConfig_<team>.yml`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TeamConfig {
    /// Resource groups per realm name.
    #[serde(default)]
    pub realms: BTreeMap<String, Vec<ResourceGroupEntry>>,
}

/// Shared configuration, `rgConfig_common.yml`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CommonConfig {
    pub tenant_id: String,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

/// Realm to subscription mapping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subscription {
    /// Realm name.
    pub name: String,
    /// Subscription id.
    pub id: String,
    /// Default region of the realm.
    pub region: String,
}

/// A resource group as declared by a team.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceGroupEntry {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: BTreeMap<String, String>,
    /// Overrides the realm region when set.
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub admin_groups: Vec<RoleBinding>,
}

/// Roles granted to one principal on the resource group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleBinding {
    /// Object id of the AAD group, user or service principal.
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roles: Vec<String>,
}

impl CommonConfig {
    /// Find the subscription entry of a realm.
    pub fn subscription(&self, realm_name: &str) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.name == realm_name)
    }
}

// `admin_groups:` with no items parses as null.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Tag values are strings in Azure, YAML happily types `cost_center: 1234` as a number.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                other => {
                    return Err(D::Error::custom(format!(
                        "tag '{key}' must be a scalar, got {other:?}"
                    )))
                }
            };
            Ok((key, value))
        })
        .collect()
}
