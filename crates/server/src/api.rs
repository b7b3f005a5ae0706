use dioxus::prelude::*;
use shared_types::PortalConfig;

/// Get the portal configuration (branding, portal links, feature flags).
/// No auth required: everything in it is shown on the public login page.
#[server]
pub async fn get_portal_config() -> Result<PortalConfig, ServerFnError> {
    Ok(crate::config::portal_config().clone())
}
