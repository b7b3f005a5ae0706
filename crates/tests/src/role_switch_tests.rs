use pretty_assertions::assert_eq;
use shared_types::{LoginPhase, Role};

use crate::common::{advance, Harness};

#[tokio::test(start_paused = true)]
async fn visit_starts_on_teacher_form() {
    let h = Harness::new();

    let session = h.session();
    assert_eq!(session.selected_role, Role::Teacher);
    assert_eq!(session.username, "");
    assert_eq!(session.password, "");
    assert!(session.error.is_none());
    assert!(!session.loading);
    assert!(!session.transitioning);
    assert_eq!(h.phase(), LoginPhase::Idle);
    assert!(h.shows_credential_form());
    assert!(!h.shows_redirect_panel());
}

#[tokio::test(start_paused = true)]
async fn role_switch_takes_effect_after_200ms() {
    let h = Harness::new();

    h.select_role(Role::Admin);
    assert!(h.session().transitioning);
    assert_eq!(h.session().selected_role, Role::Teacher);
    assert!(!h.shows_credential_form());
    assert!(!h.shows_redirect_panel());

    advance(199).await;
    assert_eq!(h.session().selected_role, Role::Teacher);
    assert_eq!(h.phase(), LoginPhase::Transitioning);

    advance(2).await;
    let session = h.session();
    assert_eq!(session.selected_role, Role::Admin);
    assert!(!session.transitioning);
    assert_eq!(h.phase(), LoginPhase::RedirectReady);
    assert!(h.shows_redirect_panel());
    assert_eq!(h.live_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn completed_switch_clears_credentials() {
    for role in [Role::Student, Role::Admin, Role::Registrar, Role::Guard] {
        let h = Harness::new();
        h.type_credentials("jdelacruz", "secret");

        h.select_role(role);
        advance(199).await;
        assert_eq!(h.session().username, "jdelacruz");
        assert_eq!(h.session().password, "secret");

        advance(2).await;
        let session = h.session();
        assert_eq!(session.selected_role, role);
        assert_eq!(session.username, "");
        assert_eq!(session.password, "");
    }
}

#[tokio::test(start_paused = true)]
async fn role_click_clears_error() {
    let h = Harness::new();
    assert!(h.submit("", "").is_err());
    assert!(h.session().error.is_some());

    h.select_role(Role::Student);
    // Error goes away on the click, not when the switch lands.
    assert!(h.session().error.is_none());
}

#[tokio::test(start_paused = true)]
async fn selecting_current_role_does_nothing() {
    let h = Harness::new();

    h.select_role(Role::Teacher);
    assert!(!h.session().transitioning);
    assert_eq!(h.live_timers(), 0);

    advance(500).await;
    assert_eq!(h.phase(), LoginPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn every_external_role_reaches_redirect_panel() {
    for role in [Role::Student, Role::Admin, Role::Registrar, Role::Guard] {
        let h = Harness::new();
        h.select_role(role);
        advance(201).await;
        assert_eq!(h.session().selected_role, role);
        assert!(h.shows_redirect_panel());
    }
}
