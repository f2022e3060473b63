//! Per-realm cache of role definition ids.
//!
//! Role definitions live at subscription level, so a name resolved once can be
//! reused for every resource group of the same realm.

use super::{ArmError, Authorization};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Default)]
pub struct RoleDefinitionCache {
    ids: BTreeMap<String, String>,
    lookups: usize,
}

impl RoleDefinitionCache {
    pub fn new() -> RoleDefinitionCache {
        Self::default()
    }

    /// Return the role definition id for `role_name`, asking ARM on a miss.
    ///
    /// # Returns
    /// * `Ok(None)` - the role does not exist at `scope`
    pub async fn resolve<A: Authorization>(
        &mut self,
        auth: &A,
        scope: &str,
        role_name: &str,
    ) -> Result<Option<String>, ArmError> {
        if let Some(id) = self.ids.get(role_name) {
            log::trace!("cache hit role '{role_name}'");
            return Ok(Some(id.clone()));
        }

        self.lookups += 1;
        match auth.find_role_definition(scope, role_name).await? {
            Some(definition) => {
                log::debug!("role '{role_name}' => {}", definition.id);
                self.ids
                    .insert(role_name.to_string(), definition.id.clone());
                Ok(Some(definition.id))
            }
            None => {
                log::warn!("role '{role_name}' not found at {scope}");
                Ok(None)
            }
        }
    }

    pub fn get(&self, role_name: &str) -> Option<&str> {
        self.ids.get(role_name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of ARM lookups performed so far.
    pub fn lookups(&self) -> usize {
        self.lookups
    }
}

impl fmt::Display for RoleDefinitionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, id) in &self.ids {
            writeln!(f, "  {name}: {id}")?;
        }
        Ok(())
    }
}
