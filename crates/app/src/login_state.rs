use std::collections::HashMap;

use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{LoginController, LoginEffect, Navigation, Role, RoleDirectory, Ticket};

/// Login view state plus the timers running on its behalf.
///
/// Owned by the `Login` component: its signals and spawned timer tasks are
/// dropped when the view unmounts, which discards the session.
#[derive(Clone, Copy)]
pub struct LoginState {
    pub controller: Signal<LoginController>,
    timers: Signal<HashMap<Ticket, Task>>,
    navigator: Navigator,
}

impl LoginState {
    fn new(controller: LoginController) -> Self {
        Self {
            controller: Signal::new(controller),
            timers: Signal::new(HashMap::new()),
            navigator: navigator(),
        }
    }

    pub fn select_role(&mut self, role: Role) {
        let effects = self.controller.write().select_role(role);
        self.run(effects);
    }

    pub fn set_username(&mut self, value: String) {
        self.controller.write().set_username(value);
    }

    pub fn set_password(&mut self, value: String) {
        self.controller.write().set_password(value);
    }

    /// Submit the credentials currently in the form.
    pub fn submit(&mut self) {
        let (username, password) = {
            let ctl = self.controller.read();
            (ctl.session().username.clone(), ctl.session().password.clone())
        };
        let result = self
            .controller
            .write()
            .submit_credentials(username, password);
        match result {
            Ok(effects) => self.run(effects),
            // Already stored on the session for the error banner.
            Err(e) if e.is_validation() => {}
            Err(e) => tracing::warn!("submit rejected: {e}"),
        }
    }

    pub fn redirect_to_portal(&mut self) {
        let result = self.controller.read().redirect_to_portal();
        match result {
            Ok(nav) => self.navigate(nav),
            Err(e) => tracing::warn!("portal redirect rejected: {e}"),
        }
    }

    fn run(&mut self, effects: Vec<LoginEffect>) {
        for effect in effects {
            match effect {
                LoginEffect::Schedule { ticket, delay } => {
                    let mut state = *self;
                    let task = spawn(async move {
                        crate::timer::sleep(delay).await;
                        state.timers.write().remove(&ticket);
                        let next = state.controller.write().fire(ticket);
                        state.run(next);
                    });
                    self.timers.write().insert(ticket, task);
                }
                LoginEffect::Cancel { ticket } => {
                    if let Some(task) = self.timers.write().remove(&ticket) {
                        task.cancel();
                    }
                }
                LoginEffect::Navigate(nav) => self.navigate(nav),
            }
        }
    }

    fn navigate(&self, nav: Navigation) {
        match nav {
            Navigation::Dashboard => {
                self.navigator.push(Route::TeacherDashboard {});
            }
            Navigation::External(_) => {
                let url = nav.href().to_string();
                tracing::info!(url = %url, "leaving for external portal");
                self.navigator.push(NavigationTarget::<Route>::External(url));
            }
        }
    }
}

/// Hook creating the per-visit login state.
///
/// `initial_role` is only read on first render.
pub fn use_login_state(directory: RoleDirectory, initial_role: Option<Role>) -> LoginState {
    use_hook(move || {
        let controller = match initial_role {
            Some(role) => LoginController::starting_on(directory, role),
            None => LoginController::new(directory),
        };
        LoginState::new(controller)
    })
}
