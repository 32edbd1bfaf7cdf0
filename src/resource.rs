//! Resource-name helpers for the remote configuration service
//!
//! The service addresses configs and variables by hierarchical resource
//! paths. These helpers are pure string work; issuing the actual requests is
//! the client's job.

/// Resource name of a config: `projects/{project}/configs/{config}`
#[must_use]
pub fn config_resource_name(project_id: &str, config_name: &str) -> String {
    format!("projects/{project_id}/configs/{config_name}")
}

/// Resource name of a variable:
/// `projects/{project}/configs/{config}/variables/{variable}`
#[must_use]
pub fn variable_resource_name(
    project_id: &str,
    config_name: &str,
    variable_name: &str,
) -> String {
    format!("projects/{project_id}/configs/{config_name}/variables/{variable_name}")
}

/// Extract the bare variable name from a full resource path (the final `/`
/// segment). Strings without a slash are returned unchanged.
#[must_use]
pub fn variable_name_from_resource(resource: &str) -> &str {
    resource.rsplit('/').next().unwrap_or(resource)
}
