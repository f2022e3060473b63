//! Realm selection.

use crate::load::ConfigError;
use crate::models::{CommonConfig, Realm, TeamConfig};

/// Resolve the realms to process.
///
/// # Arguments
/// * `realm_name` - only this realm; all realms of the team config when `None`
///
/// # Returns
/// * `Err(UnknownRealm)` - the named realm is not in the team config
/// * `Err(MissingSubscription)` - a realm has no entry in the common config
pub fn select_realms(
    team: &TeamConfig,
    common: &CommonConfig,
    realm_name: Option<&str>,
) -> Result<Vec<Realm>, ConfigError> {
    let selected: Vec<_> = match realm_name {
        Some(name) => {
            let groups = team
                .realms
                .get(name)
                .ok_or_else(|| ConfigError::UnknownRealm(name.to_string()))?;
            vec![(name, groups)]
        }
        None => team
            .realms
            .iter()
            .map(|(name, groups)| (name.as_str(), groups))
            .collect(),
    };

    if selected.is_empty() {
        log::warn!("No realms found in the config file");
    }

    selected
        .into_iter()
        .map(|(name, groups)| {
            let subscription = common
                .subscription(name)
                .ok_or_else(|| ConfigError::MissingSubscription(name.to_string()))?;
            let realm = Realm::new(subscription, groups.clone());
            log::info!("Selected realm {realm}");
            Ok(realm)
        })
        .collect()
}
