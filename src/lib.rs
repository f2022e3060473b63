//! Provision and reconcile Azure resource groups and their admin role
//! assignments from a declarative YAML configuration.

pub mod azure;
pub mod cli;
pub mod config;
pub mod load;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use azure::{auth_from_env, ArmClient};
use cli::Args;
use std::error::Error;

pub use processing::{reconcile_realm, select_realms, RealmReport};

/// Load the configuration and reconcile the selected realms one after another.
pub async fn run(args: &Args) -> Result<Vec<RealmReport>, Box<dyn Error>> {
    let (team, common) = load::load_configs(&args.config_file, args.common_config.as_deref())?;
    check_tenant(&common.tenant_id, std::env::var("AZURE_TENANT_ID").ok().as_deref());

    let realms = select_realms(&team, &common, args.realm.as_deref())?;
    let auth = auth_from_env()?;

    let mut reports = Vec::with_capacity(realms.len());
    for realm in &realms {
        let client = ArmClient::new(auth.clone(), &realm.subscription_id)?;
        reports.push(reconcile_realm(&client, realm).await?);
    }
    Ok(reports)
}

/// Exit code of a failed run: 2 for an unknown realm (like usage errors), 1 otherwise.
pub fn exit_code(err: &(dyn Error + 'static)) -> u8 {
    match err.downcast_ref::<load::ConfigError>() {
        Some(load::ConfigError::UnknownRealm(_)) => 2,
        _ => 1,
    }
}

/// Warn when the credential environment points at another tenant than the config.
fn check_tenant(configured: &str, environment: Option<&str>) -> bool {
    log::info!("tenant_id={configured}");
    match environment {
        Some(env_tenant) if !env_tenant.eq_ignore_ascii_case(configured) => {
            log::warn!("AZURE_TENANT_ID={env_tenant} differs from config tenant_id={configured}");
            false
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code() {
        let unknown: Box<dyn Error> = load::ConfigError::UnknownRealm("qa".to_string()).into();
        assert_eq!(exit_code(unknown.as_ref()), 2);

        let missing: Box<dyn Error> =
            load::ConfigError::MissingSubscription("qa".to_string()).into();
        assert_eq!(exit_code(missing.as_ref()), 1);

        let api: Box<dyn Error> = azure::ArmError::from_response(403, "").into();
        assert_eq!(exit_code(api.as_ref()), 1);
    }

    #[test]
    fn test_check_tenant() {
        let tenant = "2f3a4b5c-1d2e-4f60-8a9b-0c1d2e3f4a5b";
        assert!(check_tenant(tenant, None));
        assert!(check_tenant(tenant, Some(&tenant.to_uppercase())));
        assert!(!check_tenant(tenant, Some("00000000-0000-0000-0000-000000000000")));
    }
}
