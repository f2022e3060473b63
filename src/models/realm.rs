//! A realm joined with its subscription details.

use super::{ResourceGroupEntry, Subscription};
use std::fmt;

/// Everything needed to reconcile one realm.
#[derive(Debug, Clone, PartialEq)]
pub struct Realm {
    pub name: String,
    pub subscription_id: String,
    /// Default region for resource groups without an override.
    pub region: String,
    pub resource_groups: Vec<ResourceGroupEntry>,
}

impl Realm {
    pub fn new(subscription: &Subscription, resource_groups: Vec<ResourceGroupEntry>) -> Realm {
        Realm {
            name: subscription.name.clone(),
            subscription_id: subscription.id.clone(),
            region: subscription.region.clone(),
            resource_groups,
        }
    }

    /// Region a resource group is created in.
    pub fn region_for<'a>(&'a self, entry: &'a ResourceGroupEntry) -> &'a str {
        entry.region.as_deref().unwrap_or(&self.region)
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({} resource groups, {})",
            self.name,
            self.subscription_id,
            self.resource_groups.len(),
            self.region
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn entry(name: &str, region: Option<&str>) -> ResourceGroupEntry {
        ResourceGroupEntry {
            name: name.to_string(),
            tags: BTreeMap::new(),
            region: region.map(str::to_string),
            admin_groups: vec![],
        }
    }

    #[test]
    fn test_region_override() {
        let sub = Subscription {
            name: "dev".to_string(),
            id: "sub-1".to_string(),
            region: "westeurope".to_string(),
        };
        let realm = Realm::new(&sub, vec![entry("a", None), entry("b", Some("eastus"))]);
        assert_eq!(realm.region_for(&realm.resource_groups[0]), "westeurope");
        assert_eq!(realm.region_for(&realm.resource_groups[1]), "eastus");
        assert_eq!(
            realm.to_string(),
            "dev [sub-1] (2 resource groups, westeurope)"
        );
    }
}
