use serde::{Deserialize, Serialize};

use crate::{FeatureFlags, RoleDirectory};

/// Top-level config file structure matching `config.toml`.
///
/// Every section is optional; missing sections and fields fall back to the
/// built-in values so an absent file still yields a working login screen.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub school: SchoolInfo,
    #[serde(default)]
    pub portals: PortalUrls,
}

impl PortalConfig {
    pub fn directory(&self) -> RoleDirectory {
        RoleDirectory::new(&self.portals)
    }
}

/// Branding shown in the login header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchoolInfo {
    pub name: String,
    pub campus: String,
    /// Where the header logo links to.
    pub home_url: String,
}

impl Default for SchoolInfo {
    fn default() -> Self {
        Self {
            name: "GYMNAZO CHRISTIAN ACADEMY".to_string(),
            campus: "NOVALICHES".to_string(),
            home_url: "https://gcanovaliches.vercel.app".to_string(),
        }
    }
}

/// External portal per non-teacher role (`[portals]` section).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortalUrls {
    pub student: String,
    pub admin: String,
    pub registrar: String,
    pub guard: String,
}

impl Default for PortalUrls {
    fn default() -> Self {
        Self {
            student: "https://gcanovaliches.vercel.app".to_string(),
            admin: "https://admin-gcanovaliches.netlify.app".to_string(),
            registrar: "https://registrar-gcanovaliches.netlify.app".to_string(),
            guard: "https://guard-gcanovaliches.netlify.app".to_string(),
        }
    }
}
