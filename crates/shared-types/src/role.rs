use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AppError, PortalUrls};

/// Access category chosen on the login screen.
///
/// `Teacher` signs in with the local credential form; every other role is
/// sent to its own external portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
    Registrar,
    #[default]
    Teacher,
    Guard,
}

/// All roles in the order the role picker shows them.
pub const ALL_ROLES: &[Role] = &[
    Role::Student,
    Role::Admin,
    Role::Registrar,
    Role::Teacher,
    Role::Guard,
];

impl Role {
    /// Lowercase identifier used in URLs and config keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Registrar => "registrar",
            Role::Teacher => "teacher",
            Role::Guard => "guard",
        }
    }

    /// Human-readable label for buttons and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Admin => "Admin",
            Role::Registrar => "Registrar",
            Role::Teacher => "Teacher",
            Role::Guard => "Guard",
        }
    }

    /// Parse a role identifier. Case and surrounding whitespace are ignored.
    pub fn parse(id: &str) -> Result<Self, AppError> {
        match id.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            "registrar" => Ok(Role::Registrar),
            "teacher" => Ok(Role::Teacher),
            "guard" => Ok(Role::Guard),
            other => Err(AppError::not_found(format!("Unknown role: {other}"))),
        }
    }

    /// Whether this role logs in through the local credential form.
    pub fn uses_credentials(&self) -> bool {
        matches!(self, Role::Teacher)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable role → external portal lookup table.
///
/// Built once from the `[portals]` config section. `Teacher` never has an
/// entry, even if the config names one.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDirectory {
    student: String,
    admin: String,
    registrar: String,
    guard: String,
}

impl RoleDirectory {
    pub fn new(urls: &PortalUrls) -> Self {
        Self {
            student: urls.student.clone(),
            admin: urls.admin.clone(),
            registrar: urls.registrar.clone(),
            guard: urls.guard.clone(),
        }
    }

    /// External portal for `role`, or `None` for the teacher role and for
    /// blank config entries.
    pub fn portal_url(&self, role: Role) -> Option<&str> {
        let url = match role {
            Role::Student => &self.student,
            Role::Admin => &self.admin,
            Role::Registrar => &self.registrar,
            Role::Guard => &self.guard,
            Role::Teacher => return None,
        };
        let url = url.trim();
        (!url.is_empty()).then_some(url)
    }

    /// Roles paired with their portal URL, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Role, Option<&str>)> + '_ {
        ALL_ROLES.iter().map(|role| (*role, self.portal_url(*role)))
    }
}

impl Default for RoleDirectory {
    fn default() -> Self {
        Self::new(&PortalUrls::default())
    }
}
