use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginPhase, Navigation, Role, MISSING_FIELDS_MESSAGE};

use crate::common::{advance, Harness};

#[tokio::test(start_paused = true)]
async fn blank_fields_fail_immediately() {
    let h = Harness::new();

    let err = h.submit("", "").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, MISSING_FIELDS_MESSAGE);
    assert_eq!(err.field_error("username"), Some("Username is required"));
    assert_eq!(err.field_error("password"), Some("Password is required"));

    let session = h.session();
    assert_eq!(session.error, Some(err));
    assert!(!session.loading);
    assert_eq!(h.live_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn one_blank_field_still_fails() {
    let h = Harness::new();

    let err = h.submit("jdelacruz", "   ").unwrap_err();
    assert_eq!(err.message, MISSING_FIELDS_MESSAGE);
    assert_eq!(err.field_error("username"), None);
    assert_eq!(err.field_error("password"), Some("Password is required"));
}

#[tokio::test(start_paused = true)]
async fn valid_submit_signs_in_after_one_second() {
    let h = Harness::new();

    h.submit("jdelacruz", "secret").unwrap();
    let session = h.session();
    assert!(session.loading);
    assert!(session.error.is_none());
    assert_eq!(h.phase(), LoginPhase::Submitting);

    advance(999).await;
    assert!(h.session().loading);
    assert_eq!(h.session().logged_in_user, None);

    advance(2).await;
    let session = h.session();
    assert!(!session.loading);
    assert_eq!(session.logged_in_user.as_deref(), Some("jdelacruz"));
    assert_eq!(h.phase(), LoginPhase::LoggedIn);
    assert!(h.navigations().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dashboard_opens_two_seconds_after_sign_in() {
    let h = Harness::new();

    h.submit("jdelacruz", "secret").unwrap();
    advance(2999).await;
    assert!(h.navigations().is_empty());

    advance(2).await;
    assert_eq!(h.navigations(), vec![(3000, Navigation::Dashboard)]);
    assert_eq!(h.live_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn repeated_submit_is_ignored() {
    let h = Harness::new();

    h.submit("jdelacruz", "secret").unwrap();
    advance(500).await;
    h.submit("someone-else", "other").unwrap();
    assert_eq!(h.live_timers(), 1);

    advance(4000).await;
    assert_eq!(h.session().logged_in_user.as_deref(), Some("jdelacruz"));
    assert_eq!(h.navigations(), vec![(3000, Navigation::Dashboard)]);
}

#[tokio::test(start_paused = true)]
async fn submit_from_external_role_is_rejected() {
    let h = Harness::starting_on(Role::Registrar);

    let err = h.submit("jdelacruz", "secret").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(!h.session().loading);
    assert_eq!(h.live_timers(), 0);
}
