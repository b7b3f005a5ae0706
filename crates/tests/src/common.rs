use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shared_types::{
    AppError, LoginController, LoginEffect, LoginPhase, LoginSession, Navigation, Role,
    RoleDirectory, Ticket,
};
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Runs a [`LoginController`] on the tokio clock the way the app runs it on
/// the Dioxus scheduler: one task per scheduled ticket, aborted on cancel.
///
/// Use inside `#[tokio::test(start_paused = true)]` so timers resolve
/// deterministically.
#[derive(Clone)]
pub struct Harness {
    inner: Arc<Mutex<Inner>>,
    started: Instant,
}

struct Inner {
    controller: LoginController,
    timers: HashMap<Ticket, AbortHandle>,
    navigations: Vec<(u128, Navigation)>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_controller(LoginController::new(RoleDirectory::default()))
    }

    pub fn starting_on(role: Role) -> Self {
        Self::with_controller(LoginController::starting_on(RoleDirectory::default(), role))
    }

    fn with_controller(controller: LoginController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                controller,
                timers: HashMap::new(),
                navigations: Vec::new(),
            })),
            started: Instant::now(),
        }
    }

    pub fn select_role(&self, role: Role) {
        let effects = self.lock().controller.select_role(role);
        self.run(effects);
    }

    pub fn type_credentials(&self, username: &str, password: &str) {
        let mut inner = self.lock();
        inner.controller.set_username(username);
        inner.controller.set_password(password);
    }

    pub fn submit(&self, username: &str, password: &str) -> Result<(), AppError> {
        let effects = self
            .lock()
            .controller
            .submit_credentials(username, password)?;
        self.run(effects);
        Ok(())
    }

    pub fn redirect(&self) -> Result<(), AppError> {
        let nav = self.lock().controller.redirect_to_portal()?;
        self.record(nav);
        Ok(())
    }

    pub fn session(&self) -> LoginSession {
        self.lock().controller.session().clone()
    }

    pub fn phase(&self) -> LoginPhase {
        self.lock().controller.phase()
    }

    pub fn shows_credential_form(&self) -> bool {
        self.lock().controller.shows_credential_form()
    }

    pub fn current_portal(&self) -> Option<String> {
        self.lock().controller.current_portal().map(str::to_string)
    }

    pub fn shows_redirect_panel(&self) -> bool {
        self.lock().controller.shows_redirect_panel()
    }

    /// Navigations performed so far, with the elapsed milliseconds at which
    /// each happened.
    pub fn navigations(&self) -> Vec<(u128, Navigation)> {
        self.lock().navigations.clone()
    }

    pub fn live_timers(&self) -> usize {
        self.lock().timers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    fn run(&self, effects: Vec<LoginEffect>) {
        for effect in effects {
            match effect {
                LoginEffect::Schedule { ticket, delay } => {
                    let harness = self.clone();
                    let handle = tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let next = {
                            let mut inner = harness.lock();
                            inner.timers.remove(&ticket);
                            inner.controller.fire(ticket)
                        };
                        harness.run(next);
                    })
                    .abort_handle();
                    self.lock().timers.insert(ticket, handle);
                }
                LoginEffect::Cancel { ticket } => {
                    if let Some(handle) = self.lock().timers.remove(&ticket) {
                        handle.abort();
                    }
                }
                LoginEffect::Navigate(nav) => self.record(nav),
            }
        }
    }

    fn record(&self, nav: Navigation) {
        let elapsed = self.started.elapsed().as_millis();
        self.lock().navigations.push((elapsed, nav));
    }
}

/// Let the paused clock run forward `ms` milliseconds, firing due timers.
pub async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
