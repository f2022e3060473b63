//! Create or update the resource groups of a realm.

use super::{assign_roles, RealmReport};
use crate::azure::{resource_group_scope, Authorization, ResourceGroups, RoleDefinitionCache};
use crate::models::{Realm, ResourceGroup, ResourceGroupEntry};
use crate::output;
use std::error::Error;

/// Reconcile every resource group of `realm`, in config order.
///
/// `client` must be bound to the realm's subscription. The first error that is
/// not a missing role or an existing assignment stops the run.
pub async fn reconcile_realm<C>(client: &C, realm: &Realm) -> Result<RealmReport, Box<dyn Error>>
where
    C: ResourceGroups + Authorization,
{
    output::print_realm(&realm.name);
    log::info!("#Start reconcile_realm() {realm}");

    let mut cache = RoleDefinitionCache::new();
    let mut report = RealmReport::new(&realm.name);

    for entry in &realm.resource_groups {
        reconcile_resource_group(client, realm, entry, &mut cache, &mut report).await?;
    }
    report.role_lookups = cache.lookups();

    log::info!("{report}");
    Ok(report)
}

/// Create the resource group, or replace the tags of an existing one, then assign roles.
pub async fn reconcile_resource_group<C>(
    client: &C,
    realm: &Realm,
    entry: &ResourceGroupEntry,
    cache: &mut RoleDefinitionCache,
    report: &mut RealmReport,
) -> Result<ResourceGroup, Box<dyn Error>>
where
    C: ResourceGroups + Authorization,
{
    let name = entry.name.as_str();
    let region = realm.region_for(entry);
    println!("Working on:\n rg_name: {name}");

    if client.check_existence(name).await? {
        println!("[RG]: {name} Already exist !\n Skipping creation...");
        let mut group = client.get(name).await?;

        if normalize_region(&group.location) != normalize_region(region) {
            log::warn!(
                "{name} is in {} but configured for {region}, location can't be changed",
                group.location
            );
        }

        println!("[RG]: Updating tags...");
        group.tags = entry.tags.clone();
        let group = client.create_or_update(name, &group).await?;

        println!("[RG]: Updating role assignments...");
        let scope = scope_of(&group, realm, name);
        assign_roles(client, cache, &scope, &entry.admin_groups, report).await?;

        output::print_success(&format!("[RG]: {name} Updated !"));
        report.updated.push(name.to_string());
        Ok(group)
    } else {
        println!("[RG]: Creating Resource Group {name}...\n");
        let group = client
            .create_or_update(name, &ResourceGroup::new(region, entry.tags.clone()))
            .await?;

        let scope = scope_of(&group, realm, name);
        assign_roles(client, cache, &scope, &entry.admin_groups, report).await?;

        output::print_success(&format!("[RG]: {name} Created !\n"));
        output::print_resource_group(&group);
        report.created.push(name.to_string());
        Ok(group)
    }
}

fn scope_of(group: &ResourceGroup, realm: &Realm, name: &str) -> String {
    group
        .id
        .clone()
        .unwrap_or_else(|| resource_group_scope(&realm.subscription_id, name))
}

// "West Europe" and "westeurope" are the same region.
fn normalize_region(region: &str) -> String {
    region
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
