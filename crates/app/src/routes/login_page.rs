use dioxus::prelude::*;
use shared_types::{PortalConfig, Role};

use super::login::Login;
use super::login_header::LoginHeader;

/// Login screen composition: header bar over the login card.
///
/// `role` comes from the `?role=` query and preselects a role. An empty or
/// unknown value falls back to the teacher form.
#[component]
pub fn LoginPage(role: String) -> Element {
    let config: PortalConfig = use_context();

    let initial_role = if role.is_empty() {
        None
    } else {
        match Role::parse(&role) {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!("ignoring role query: {e}");
                None
            }
        }
    };

    rsx! {
        LoginHeader { school: config.school.clone() }
        main {
            section { id: "home",
                Login { initial_role }
            }
        }
    }
}
