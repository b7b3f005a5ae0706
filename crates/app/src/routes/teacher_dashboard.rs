use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::PortalConfig;
use shared_ui::{Card, CardContent, CardHeader};

/// Landing page reached after a successful teacher sign-in.
#[component]
pub fn TeacherDashboard() -> Element {
    let config: PortalConfig = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    h1 { class: "dashboard-title", "Teacher Dashboard" }
                    p { class: "dashboard-school", "{config.school.name} · {config.school.campus}" }
                }
                CardContent {
                    p { "You are signed in to the teacher portal." }
                    Link { to: Route::login(), class: "dashboard-signout", "Sign out" }
                }
            }
        }
    }
}
