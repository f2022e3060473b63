//! Role assignments for the admin groups of a resource group.

use super::RealmReport;
use crate::azure::{ArmError, Authorization, RoleDefinitionCache};
use crate::config;
use crate::models::{RoleAssignmentRequest, RoleBinding};
use crate::output;
use std::io::{self, Write};
use uuid::Uuid;

/// Grant every configured role to every configured principal at `scope`.
///
/// Missing roles and already existing assignments are reported and skipped,
/// any other error aborts.
pub async fn assign_roles<A: Authorization>(
    auth: &A,
    cache: &mut RoleDefinitionCache,
    scope: &str,
    bindings: &[RoleBinding],
    report: &mut RealmReport,
) -> Result<(), ArmError> {
    let mut stdout = io::stdout();
    let debug_out = if std::env::var_os(config::DEBUG_ENV).is_some() {
        Some(&mut stdout as &mut dyn Write)
    } else {
        None
    };
    assign_roles_with_debug(auth, cache, scope, bindings, report, debug_out).await
}

/// [`assign_roles`], dumping the cached role ids to `debug_out` after every lookup.
async fn assign_roles_with_debug<A: Authorization>(
    auth: &A,
    cache: &mut RoleDefinitionCache,
    scope: &str,
    bindings: &[RoleBinding],
    report: &mut RealmReport,
    mut debug_out: Option<&mut dyn Write>,
) -> Result<(), ArmError> {
    if bindings.is_empty() {
        log::warn!("No admin_groups configured for {scope}");
        println!("{}", output::ADMIN_GROUPS_HELP);
        return Ok(());
    }

    for binding in bindings {
        for role_name in &binding.roles {
            let resolved = cache.resolve(auth, scope, role_name).await?;
            if let Some(out) = debug_out.as_mut() {
                let _ = writeln!(out, "[DEBUG]: Role IDs:\n{cache}");
            }

            let Some(role_definition_id) = resolved else {
                output::print_error(&format!(
                    "Role not found: Please check if the role {role_name} exists in the selected subscription!"
                ));
                report.add_missing_role(role_name);
                continue;
            };

            let request = RoleAssignmentRequest::new(&role_definition_id, &binding.name);
            match auth
                .create_role_assignment(scope, Uuid::new_v4(), &request)
                .await
            {
                Ok(assignment) => {
                    log::info!(
                        "assigned '{role_name}' to {} at {scope} ({})",
                        binding.name,
                        assignment.name
                    );
                    report.assignments_created += 1;
                }
                Err(e) if e.is_conflict() => {
                    output::print_warning(&e.message());
                    report.assignments_existing += 1;
                }
                Err(e) => {
                    log::error!("assigning '{role_name}' to {} failed: {e}", binding.name);
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}
