//! Reading and validating the team and common YAML configuration.

use crate::config;
use crate::models::{CommonConfig, ResourceGroupEntry, TeamConfig};
use itertools::Itertools;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing {path}: path={field} error={message}")]
    Parse {
        path: PathBuf,
        field: String,
        message: String,
    },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("The realm \"{0}\" does not exist in the config file!")]
    UnknownRealm(String),

    #[error("No subscription configured for realm \"{0}\" in the common config!")]
    MissingSubscription(String),
}

/// Azure resource group names: letters, digits, `_-.()`, up to 90 chars.
static RESOURCE_GROUP_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static GUID_REGEX: OnceLock<Regex> = OnceLock::new();

fn resource_group_name_regex() -> &'static Regex {
    RESOURCE_GROUP_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[-\w.()]{1,90}$").expect("Invalid Regex"))
}

fn guid_regex() -> &'static Regex {
    GUID_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .expect("Invalid Regex")
    })
}

pub fn is_valid_resource_group_name(name: &str) -> bool {
    resource_group_name_regex().is_match(name) && !name.ends_with('.')
}

pub fn is_guid(value: &str) -> bool {
    guid_regex().is_match(value)
}

/// Common config path: explicit one, else [`config::COMMON_CONFIG_FILE`] next to the team config.
pub fn common_config_path(team_config: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => team_config
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(config::COMMON_CONFIG_FILE),
    }
}

/// Deserialize a YAML file, reporting the path of the failing field.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Reading config file: {}", path.display());

    let deserializer = serde_yaml::Deserializer::from_str(&text);
    serde_path_to_error::deserialize(deserializer).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        field: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

pub fn load_team_config(path: &Path) -> Result<TeamConfig, ConfigError> {
    let team: TeamConfig = read_yaml(path)?;
    validate_team_config(&team).map_err(|message| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(team)
}

pub fn load_common_config(path: &Path) -> Result<CommonConfig, ConfigError> {
    let common: CommonConfig = read_yaml(path)?;
    validate_common_config(&common).map_err(|message| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(common)
}

/// Load the team config and its common config, in that order.
pub fn load_configs(
    team_config: &Path,
    common_config: Option<&Path>,
) -> Result<(TeamConfig, CommonConfig), ConfigError> {
    let team = load_team_config(team_config)?;
    let common = load_common_config(&common_config_path(team_config, common_config))?;
    log::info!(
        "Loaded {} realms, {} subscriptions",
        team.realms.len(),
        common.subscriptions.len()
    );
    Ok((team, common))
}

pub fn validate_team_config(team: &TeamConfig) -> Result<(), String> {
    for (realm, groups) in &team.realms {
        for entry in groups {
            validate_entry(realm, entry)?;
        }
        // Azure resource group names are case-insensitive.
        if let Some(dup) = groups
            .iter()
            .map(|g| g.name.to_lowercase())
            .duplicates()
            .next()
        {
            return Err(format!(
                "realms.{realm}: resource group '{dup}' is declared more than once"
            ));
        }
    }
    Ok(())
}

fn validate_entry(realm: &str, entry: &ResourceGroupEntry) -> Result<(), String> {
    if !is_valid_resource_group_name(&entry.name) {
        return Err(format!(
            "realms.{realm}: invalid resource group name '{}'",
            entry.name
        ));
    }
    if let Some(region) = &entry.region {
        if region.trim().is_empty() {
            return Err(format!("realms.{realm}.{}: empty region", entry.name));
        }
    }
    for binding in &entry.admin_groups {
        if !is_guid(&binding.name) {
            return Err(format!(
                "realms.{realm}.{}: admin group '{}' is not an object id",
                entry.name, binding.name
            ));
        }
        if binding.roles.iter().any(|r| r.trim().is_empty()) {
            return Err(format!(
                "realms.{realm}.{}: empty role name for admin group '{}'",
                entry.name, binding.name
            ));
        }
    }
    Ok(())
}

pub fn validate_common_config(common: &CommonConfig) -> Result<(), String> {
    if !is_guid(&common.tenant_id) {
        return Err(format!("tenant_id '{}' is not a GUID", common.tenant_id));
    }
    for sub in &common.subscriptions {
        if !is_guid(&sub.id) {
            return Err(format!(
                "subscriptions.{}: id '{}' is not a GUID",
                sub.name, sub.id
            ));
        }
    }
    if let Some(dup) = common.subscriptions.iter().map(|s| &s.name).duplicates().next() {
        return Err(format!("subscriptions: realm '{dup}' is declared more than once"));
    }
    Ok(())
}
