use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};
use dioxus_free_icons::Icon;
use shared_types::SchoolInfo;
use shared_ui::theme::ThemeState;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Sticky header with the school brand, dark-mode toggle and page banner.
#[component]
pub fn LoginHeader(school: SchoolInfo) -> Element {
    let mut theme = use_context::<ThemeState>();
    let is_dark = theme.mode.read().is_dark();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login_header.css") }

        header { class: "login-header",
            div { class: "login-header-bar",
                div { class: "login-header-brand",
                    a { href: "{school.home_url}",
                        img {
                            class: "login-header-logo",
                            src: LOGO,
                            alt: "{school.name}",
                        }
                    }
                    div { class: "login-header-text",
                        div { class: "login-header-name", "{school.name}" }
                        div { class: "login-header-campus", "{school.campus}" }
                    }
                }
                button {
                    class: "theme-toggle",
                    r#type: "button",
                    aria_label: "Toggle dark mode",
                    onclick: move |_| theme.toggle(),
                    if is_dark {
                        Icon { width: 16, height: 16, icon: LdMoon }
                    } else {
                        Icon { width: 16, height: 16, icon: LdSun }
                    }
                }
            }
            div { class: "login-header-banner",
                h1 { "TEACHER PORTAL LOGIN" }
            }
        }
    }
}
