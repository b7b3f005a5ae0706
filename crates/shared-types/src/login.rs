//! Role-based login view state.
//!
//! [`LoginController`] is a pure reducer: operations mutate the session and
//! return [`LoginEffect`]s. The runtime executes the effects (timers and
//! navigation) and reports elapsed timers back through
//! [`LoginController::fire`]. At most one deferred step is pending at a time;
//! a ticket that is no longer the pending one is stale and ignored.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{AppError, Role, RoleDirectory};

/// Delay between a role click and the new role taking effect.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(200);
/// Simulated credential check.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);
/// Pause on the logged-in state before opening the dashboard.
pub const DASHBOARD_DELAY: Duration = Duration::from_millis(2000);

/// In-app route opened after a teacher signs in.
pub const DASHBOARD_ROUTE: &str = "/teacher-dashboard";

/// Banner text when a credential field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Identifies one scheduled deferred step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
struct TicketSeq {
    next: u64,
}

impl TicketSeq {
    fn next_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next);
        self.next = self.next.wrapping_add(1);
        ticket
    }
}

/// Where the controller wants the browser to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// The teacher dashboard route inside this app.
    Dashboard,
    /// Full page load of an external portal.
    External(String),
}

impl Navigation {
    pub fn href(&self) -> &str {
        match self {
            Navigation::Dashboard => DASHBOARD_ROUTE,
            Navigation::External(url) => url,
        }
    }
}

/// Work the runtime must perform on behalf of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEffect {
    /// Call [`LoginController::fire`] with `ticket` once `delay` has elapsed.
    Schedule { ticket: Ticket, delay: Duration },
    /// Drop the timer started for `ticket`.
    Cancel { ticket: Ticket },
    Navigate(Navigation),
}

/// Coarse state of the login view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    /// Teacher selected, credential form shown.
    Idle,
    /// Role switch pending; form and redirect panel hidden.
    Transitioning,
    /// Simulated credential check running.
    Submitting,
    /// Signed in, dashboard navigation pending.
    LoggedIn,
    /// Non-teacher role selected, redirect panel shown.
    RedirectReady,
}

/// Per-visit state read by the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginSession {
    pub selected_role: Role,
    pub username: String,
    pub password: String,
    pub error: Option<AppError>,
    pub loading: bool,
    pub transitioning: bool,
    pub logged_in_user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredStep {
    FinishTransition(Role),
    FinishSubmit,
    OpenDashboard,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: Ticket,
    step: DeferredStep,
}

#[derive(Debug, Clone)]
pub struct LoginController {
    session: LoginSession,
    directory: RoleDirectory,
    seq: TicketSeq,
    pending: Option<Pending>,
}

impl Default for LoginController {
    fn default() -> Self {
        Self::new(RoleDirectory::default())
    }
}

impl LoginController {
    pub fn new(directory: RoleDirectory) -> Self {
        Self {
            session: LoginSession::default(),
            directory,
            seq: TicketSeq::default(),
            pending: None,
        }
    }

    /// Start the visit on `role` instead of the default teacher form.
    pub fn starting_on(directory: RoleDirectory, role: Role) -> Self {
        let mut controller = Self::new(directory);
        controller.session.selected_role = role;
        controller
    }

    pub fn session(&self) -> &LoginSession {
        &self.session
    }

    pub fn selected_role(&self) -> Role {
        self.session.selected_role
    }

    /// Ticket of the deferred step currently waiting on a timer.
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.map(|p| p.ticket)
    }

    pub fn phase(&self) -> LoginPhase {
        match self.pending.map(|p| p.step) {
            Some(DeferredStep::FinishTransition(_)) => LoginPhase::Transitioning,
            Some(DeferredStep::FinishSubmit) => LoginPhase::Submitting,
            Some(DeferredStep::OpenDashboard) => LoginPhase::LoggedIn,
            None if self.session.selected_role.uses_credentials() => LoginPhase::Idle,
            None => LoginPhase::RedirectReady,
        }
    }

    /// Whether the credential form should be visible.
    pub fn shows_credential_form(&self) -> bool {
        self.session.selected_role.uses_credentials() && !self.session.transitioning
    }

    /// Whether the external portal panel should be visible.
    pub fn shows_redirect_panel(&self) -> bool {
        !self.session.selected_role.uses_credentials() && !self.session.transitioning
    }

    /// Portal of the selected role, for display.
    pub fn current_portal(&self) -> Option<&str> {
        self.directory.portal_url(self.session.selected_role)
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        if !self.session.loading {
            self.session.username = value.into();
        }
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        if !self.session.loading {
            self.session.password = value.into();
        }
    }

    /// Switch to `role` after [`TRANSITION_DELAY`].
    ///
    /// Re-selecting the role already selected (or already being switched to)
    /// does nothing. A newer selection replaces any pending deferred step, so
    /// the last click wins.
    pub fn select_role(&mut self, role: Role) -> Vec<LoginEffect> {
        let heading_to = self.transition_target();
        if heading_to == Some(role) || (heading_to.is_none() && role == self.session.selected_role)
        {
            return Vec::new();
        }

        let mut effects = Vec::new();
        self.cancel_pending(&mut effects);
        self.session.error = None;

        if role == self.session.selected_role {
            debug!(role = %role, "role switch aborted, back on current role");
            return effects;
        }

        let ticket = self.seq.next_ticket();
        self.session.transitioning = true;
        self.pending = Some(Pending {
            ticket,
            step: DeferredStep::FinishTransition(role),
        });
        debug!(from = %self.session.selected_role, to = %role, ?ticket, "role switch scheduled");
        effects.push(LoginEffect::Schedule {
            ticket,
            delay: TRANSITION_DELAY,
        });
        effects
    }

    /// Simulated teacher sign-in.
    ///
    /// Blank fields fail synchronously with a validation error that is also
    /// stored on the session. Any non-blank pair is accepted: no credential
    /// check exists behind this form yet. Submits while a role switch or an
    /// earlier submission is pending are ignored.
    pub fn submit_credentials(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Vec<LoginEffect>, AppError> {
        if let Some(pending) = self.pending {
            debug!(step = ?pending.step, "submit ignored while a deferred step is pending");
            return Ok(Vec::new());
        }
        if !self.session.selected_role.uses_credentials() {
            return Err(AppError::bad_request(format!(
                "The {} role signs in through its own portal",
                self.session.selected_role.label()
            )));
        }

        self.session.username = username.into();
        self.session.password = password.into();
        self.session.error = None;

        let mut field_errors = HashMap::new();
        if self.session.username.trim().is_empty() {
            field_errors.insert("username".to_string(), "Username is required".to_string());
        }
        if self.session.password.trim().is_empty() {
            field_errors.insert("password".to_string(), "Password is required".to_string());
        }
        if !field_errors.is_empty() {
            let err = AppError::validation(MISSING_FIELDS_MESSAGE, field_errors);
            self.session.error = Some(err.clone());
            return Err(err);
        }

        let ticket = self.seq.next_ticket();
        self.session.loading = true;
        self.pending = Some(Pending {
            ticket,
            step: DeferredStep::FinishSubmit,
        });
        debug!(?ticket, "credential submit scheduled");
        Ok(vec![LoginEffect::Schedule {
            ticket,
            delay: SUBMIT_DELAY,
        }])
    }

    /// Navigation to the selected role's external portal.
    pub fn redirect_to_portal(&self) -> Result<Navigation, AppError> {
        if self.session.transitioning {
            return Err(AppError::bad_request("A role switch is in progress"));
        }
        let role = self.session.selected_role;
        if role.uses_credentials() {
            return Err(AppError::bad_request(
                "The Teacher role signs in with a username and password",
            ));
        }
        let url = self.directory.portal_url(role).ok_or_else(|| {
            AppError::not_found(format!("No portal configured for the {} role", role.label()))
        })?;
        info!(role = %role, url, "redirecting to external portal");
        Ok(Navigation::External(url.to_string()))
    }

    /// Apply the deferred step for `ticket` once its delay has elapsed.
    pub fn fire(&mut self, ticket: Ticket) -> Vec<LoginEffect> {
        let pending = match self.pending {
            Some(pending) if pending.ticket == ticket => pending,
            _ => {
                debug!(?ticket, "stale ticket ignored");
                return Vec::new();
            }
        };
        self.pending = None;

        match pending.step {
            DeferredStep::FinishTransition(role) => {
                self.session.selected_role = role;
                self.session.username.clear();
                self.session.password.clear();
                self.session.logged_in_user = None;
                self.session.transitioning = false;
                debug!(role = %role, "role switch complete");
                Vec::new()
            }
            DeferredStep::FinishSubmit => {
                self.session.loading = false;
                self.session.logged_in_user = Some(self.session.username.clone());
                info!(username = %self.session.username, "teacher signed in");
                let ticket = self.seq.next_ticket();
                self.pending = Some(Pending {
                    ticket,
                    step: DeferredStep::OpenDashboard,
                });
                vec![LoginEffect::Schedule {
                    ticket,
                    delay: DASHBOARD_DELAY,
                }]
            }
            DeferredStep::OpenDashboard => vec![LoginEffect::Navigate(Navigation::Dashboard)],
        }
    }

    fn transition_target(&self) -> Option<Role> {
        match self.pending.map(|p| p.step) {
            Some(DeferredStep::FinishTransition(role)) => Some(role),
            _ => None,
        }
    }

    fn cancel_pending(&mut self, effects: &mut Vec<LoginEffect>) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        match pending.step {
            DeferredStep::FinishTransition(_) => self.session.transitioning = false,
            DeferredStep::FinishSubmit => self.session.loading = false,
            DeferredStep::OpenDashboard => self.session.logged_in_user = None,
        }
        debug!(ticket = ?pending.ticket, "pending step cancelled");
        effects.push(LoginEffect::Cancel {
            ticket: pending.ticket,
        });
    }
}
