use crate::login_state::use_login_state;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowRight, LdBookOpen, LdClipboardList, LdGraduationCap, LdLock, LdShield, LdUser,
    LdUserCog,
};
use dioxus_free_icons::Icon;
use shared_types::{PortalConfig, Role, ALL_ROLES};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, Input};

fn role_icon(role: Role) -> Element {
    match role {
        Role::Student => rsx! { Icon { width: 18, height: 18, icon: LdGraduationCap } },
        Role::Admin => rsx! { Icon { width: 18, height: 18, icon: LdUserCog } },
        Role::Registrar => rsx! { Icon { width: 18, height: 18, icon: LdClipboardList } },
        Role::Teacher => rsx! { Icon { width: 18, height: 18, icon: LdBookOpen } },
        Role::Guard => rsx! { Icon { width: 18, height: 18, icon: LdShield } },
    }
}

/// Role picker plus either the teacher credential form or the redirect
/// panel for the selected role.
#[component]
pub fn Login(initial_role: Option<Role>) -> Element {
    let config: PortalConfig = use_context();
    let mut state = use_login_state(config.directory(), initial_role);

    let ctl = state.controller.read();
    let session = ctl.session().clone();
    let selected = ctl.selected_role();
    let show_form = ctl.shows_credential_form();
    let show_redirect = ctl.shows_redirect_panel();
    let portal = ctl.current_portal().map(str::to_string);
    drop(ctl);

    let username_error = session
        .error
        .as_ref()
        .and_then(|e| e.field_error("username"))
        .map(str::to_string);
    let password_error = session
        .error
        .as_ref()
        .and_then(|e| e.field_error("password"))
        .map(str::to_string);
    let content_class = if session.transitioning {
        "login-content transitioning"
    } else {
        "login-content"
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.submit();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    div { class: "login-roles",
                        for role in ALL_ROLES.iter().copied() {
                            button {
                                key: "{role}",
                                r#type: "button",
                                class: "login-role",
                                "data-selected": role == selected,
                                aria_label: "Login as {role.label()}",
                                onclick: move |_| state.select_role(role),
                                {role_icon(role)}
                                span { "{role.label()}" }
                            }
                        }
                    }
                }

                CardContent {
                    div { class: "{content_class}",
                        if let Some(err) = &session.error {
                            div { class: "login-error", role: "alert", "{err.message}" }
                        }

                        if let Some(user) = &session.logged_in_user {
                            div { class: "login-success",
                                "Welcome, {user}! Opening your dashboard..."
                            }
                        }

                        if show_form {
                            form { class: "login-form", onsubmit: handle_submit,
                                div { class: "login-field",
                                    Input {
                                        id: "username",
                                        placeholder: "Teacher Username",
                                        value: session.username.clone(),
                                        disabled: session.loading,
                                        icon: rsx! { Icon { width: 16, height: 16, icon: LdUser } },
                                        error: username_error,
                                        on_input: move |e: FormEvent| state.set_username(e.value()),
                                    }
                                }
                                div { class: "login-field",
                                    Input {
                                        id: "password",
                                        input_type: "password",
                                        placeholder: "Password",
                                        value: session.password.clone(),
                                        disabled: session.loading,
                                        icon: rsx! { Icon { width: 16, height: 16, icon: LdLock } },
                                        error: password_error,
                                        on_input: move |e: FormEvent| state.set_password(e.value()),
                                    }
                                }
                                div { class: "login-forgot-password",
                                    Link { to: Route::ForgotPassword {}, "Forgot Password?" }
                                }
                                Button {
                                    button_type: "submit",
                                    class: "login-submit",
                                    loading: session.loading,
                                    loading_label: "Logging in...",
                                    "Login"
                                }
                            }
                        }

                        if show_redirect {
                            div { class: "login-redirect",
                                div { class: "login-redirect-icon", {role_icon(selected)} }
                                h2 { "{selected.label()} Portal" }
                                p {
                                    "You will be redirected to the {selected.as_str()} portal"
                                }
                                if let Some(url) = &portal {
                                    p { class: "login-redirect-url", "{url}" }
                                }
                                Button {
                                    class: "login-redirect-continue",
                                    onclick: move |_| state.redirect_to_portal(),
                                    "Continue to Portal"
                                    Icon { width: 16, height: 16, icon: LdArrowRight }
                                }
                                p { class: "login-redirect-switch",
                                    "Not a {selected.as_str()}? "
                                    Button {
                                        variant: ButtonVariant::Link,
                                        onclick: move |_| state.select_role(Role::Teacher),
                                        "login as teacher"
                                    }
                                }
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "login-help",
                        "Need help? Contact the "
                        a { href: "{config.school.home_url}/#contact-us", "School Office" }
                    }
                }
            }
        }
    }
}
