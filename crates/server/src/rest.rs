//! Read-only JSON endpoints for the login screen's static data.

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use shared_types::{PortalConfig, Role};

use crate::config::portal_config;

/// One entry of the role picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleEntry {
    pub id: Role,
    pub label: String,
    /// External portal; absent for the teacher role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub async fn get_config() -> Json<PortalConfig> {
    Json(portal_config().clone())
}

pub async fn list_roles() -> Json<Vec<RoleEntry>> {
    let directory = portal_config().directory();
    let entries = directory
        .entries()
        .map(|(role, url)| RoleEntry {
            id: role,
            label: role.label().to_string(),
            url: url.map(str::to_string),
        })
        .collect();
    Json(entries)
}

pub fn rest_router() -> Router {
    Router::new()
        .route("/api/v1/config", get(get_config))
        .route("/api/v1/roles", get(list_roles))
}
