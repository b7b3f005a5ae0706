use pretty_assertions::assert_eq;
use shared_types::{LoginPhase, Role};

use crate::common::{advance, Harness};

#[tokio::test(start_paused = true)]
async fn last_click_wins() {
    let h = Harness::new();

    h.select_role(Role::Admin);
    advance(50).await;
    h.select_role(Role::Guard);
    assert_eq!(h.live_timers(), 1);

    // Admin's timer would have landed here.
    advance(151).await;
    assert_eq!(h.session().selected_role, Role::Teacher);
    assert!(h.session().transitioning);

    advance(50).await;
    assert_eq!(h.session().selected_role, Role::Guard);
    assert!(!h.session().transitioning);
}

#[tokio::test(start_paused = true)]
async fn reselecting_pending_target_keeps_its_timer() {
    let h = Harness::new();

    h.select_role(Role::Admin);
    advance(100).await;
    h.select_role(Role::Admin);

    advance(101).await;
    assert_eq!(h.session().selected_role, Role::Admin);
}

#[tokio::test(start_paused = true)]
async fn reselecting_committed_role_aborts_switch() {
    let h = Harness::new();
    h.type_credentials("jdelacruz", "secret");

    h.select_role(Role::Registrar);
    advance(100).await;
    h.select_role(Role::Teacher);

    assert!(!h.session().transitioning);
    assert_eq!(h.phase(), LoginPhase::Idle);
    assert_eq!(h.live_timers(), 0);

    advance(500).await;
    let session = h.session();
    assert_eq!(session.selected_role, Role::Teacher);
    assert_eq!(session.username, "jdelacruz");
}

#[tokio::test(start_paused = true)]
async fn role_switch_cancels_pending_submit() {
    let h = Harness::new();

    h.submit("jdelacruz", "secret").unwrap();
    advance(500).await;
    h.select_role(Role::Admin);
    assert!(!h.session().loading);

    advance(4000).await;
    let session = h.session();
    assert_eq!(session.selected_role, Role::Admin);
    assert_eq!(session.logged_in_user, None);
    assert!(h.navigations().is_empty());
}

#[tokio::test(start_paused = true)]
async fn role_switch_cancels_dashboard_navigation() {
    let h = Harness::new();

    h.submit("jdelacruz", "secret").unwrap();
    advance(1500).await;
    assert_eq!(h.phase(), LoginPhase::LoggedIn);

    h.select_role(Role::Student);
    assert_eq!(h.session().logged_in_user, None);

    advance(4000).await;
    assert!(h.navigations().is_empty());
    assert_eq!(h.session().selected_role, Role::Student);
}

#[tokio::test(start_paused = true)]
async fn submit_during_transition_is_ignored() {
    let h = Harness::new();

    h.select_role(Role::Admin);
    h.submit("jdelacruz", "secret").unwrap();
    assert!(!h.session().loading);

    advance(201).await;
    assert_eq!(h.session().selected_role, Role::Admin);
    assert_eq!(h.live_timers(), 0);
}
