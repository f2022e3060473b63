//! Summary of a realm run.

use std::fmt;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RealmReport {
    pub realm: String,
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub assignments_created: usize,
    /// Assignments ARM answered with a conflict for.
    pub assignments_existing: usize,
    /// Role definition lookups sent to ARM, one per distinct role when the cache works.
    pub role_lookups: usize,
    /// Role names that do not exist in the subscription.
    pub missing_roles: Vec<String>,
}

impl RealmReport {
    pub fn new(realm: &str) -> RealmReport {
        RealmReport {
            realm: realm.to_string(),
            ..Default::default()
        }
    }

    pub fn add_missing_role(&mut self, role_name: &str) {
        if !self.missing_roles.iter().any(|r| r == role_name) {
            self.missing_roles.push(role_name.to_string());
        }
    }
}

impl fmt::Display for RealmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "realm {}: created={} updated={} assignments created={} existing={} role lookups={}",
            self.realm,
            self.created.len(),
            self.updated.len(),
            self.assignments_created,
            self.assignments_existing,
            self.role_lookups
        )?;
        if !self.missing_roles.is_empty() {
            write!(f, " missing roles=[{}]", self.missing_roles.join(", "))?;
        }
        Ok(())
    }
}
