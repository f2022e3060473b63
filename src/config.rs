//! Compile-time settings for talking to Azure Resource Manager.

/// Default ARM endpoint, override with [`ARM_ENDPOINT_ENV`].
pub const ARM_ENDPOINT: &str = "https://management.azure.com";
pub const ARM_ENDPOINT_ENV: &str = "AZURE_RESOURCE_MANAGER_URL";

/// Bearer token used instead of the credential chain when set.
pub const ACCESS_TOKEN_ENV: &str = "AZURE_ACCESS_TOKEN";

/// OAuth scope requested from the credential chain.
pub const ARM_SCOPE: &str = "https://management.azure.com/.default";

pub const RESOURCE_GROUPS_API_VERSION: &str = "2021-04-01";
pub const AUTHORIZATION_API_VERSION: &str = "2022-04-01";

pub const HTTP_TIMEOUT_SEC: u64 = 60;

/// Looked up next to the team config when no path is given.
pub const COMMON_CONFIG_FILE: &str = "rgConfig_common.yml";

/// When set (any value) the resolved role definition ids are printed.
pub const DEBUG_ENV: &str = "DEBUG";

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
