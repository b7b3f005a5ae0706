use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::PortalConfig;
use shared_ui::{Card, CardContent, CardFooter, CardHeader};

/// Password help for teachers. Accounts are managed by the school office,
/// so this only points there.
#[component]
pub fn ForgotPassword() -> Element {
    let config: PortalConfig = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    h1 { class: "dashboard-title", "Forgot Password" }
                }
                CardContent {
                    p {
                        "Teacher passwords are reset by the "
                        a { href: "{config.school.home_url}/#contact-us", "School Office" }
                        ". Bring your faculty ID to have a new one issued."
                    }
                }
                CardFooter {
                    Link { to: Route::login(), "Back to login" }
                }
            }
        }
    }
}
