pub mod forgot_password;
pub mod login;
pub mod login_header;
pub mod login_page;
pub mod not_found;
pub mod teacher_dashboard;

use dioxus::prelude::*;

use forgot_password::ForgotPassword;
use login_page::LoginPage;
use not_found::NotFound;
use teacher_dashboard::TeacherDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/?:role")]
    LoginPage { role: String },
    #[route("/teacher-dashboard")]
    TeacherDashboard {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The login screen with the default (teacher) role.
    pub fn login() -> Self {
        Route::LoginPage {
            role: String::new(),
        }
    }
}
