use crate::tests::fakes::{
    EMAIL, FakeIdentityProvider, FakeTransport, PASSWORD, UID, identity, ready_session,
    server_profile, spawn_session,
};
use crate::{FailureKind, IdentityError, SessionError, TransportError};

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use sp_core::{
    Biometrics, DraftField, FieldUpdate, Goals, PendingOperation, Profile, SessionState,
};
use tokio::sync::Notify;

const SETTLE: Duration = Duration::from_millis(50);

// =============================================================================
// Sign-in
// =============================================================================

#[tokio::test]
async fn given_wrong_password_when_sign_in_then_stays_unauthenticated() {
    let transport = Arc::new(FakeTransport::new());
    let presenter = spawn_session(
        Arc::new(FakeIdentityProvider::with_default_account()),
        Arc::clone(&transport),
    );

    let err = presenter.sign_in(EMAIL, "wrong").await.unwrap_err();

    assert!(matches!(
        err,
        SessionError::Identity(IdentityError::InvalidCredentials { .. })
    ));
    assert_eq!(presenter.state(), SessionState::Unauthenticated);
    assert_eq!(transport.fetch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_provider_unreachable_when_sign_in_then_stays_unauthenticated() {
    let provider = Arc::new(FakeIdentityProvider::with_default_account());
    provider.set_unavailable(true);
    let presenter = spawn_session(Arc::clone(&provider), Arc::new(FakeTransport::new()));

    let err = presenter.sign_in(EMAIL, PASSWORD).await.unwrap_err();

    assert!(matches!(
        err,
        SessionError::Identity(IdentityError::IdentityUnavailable { .. })
    ));
    assert_eq!(presenter.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn given_blank_credentials_when_sign_in_then_provider_not_contacted() {
    let provider = Arc::new(FakeIdentityProvider::with_default_account());
    let presenter = spawn_session(Arc::clone(&provider), Arc::new(FakeTransport::new()));

    for (email, password) in [("", PASSWORD), (EMAIL, ""), ("   ", PASSWORD)] {
        let err = presenter.sign_in(email, password).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Identity(IdentityError::InvalidCredentials { .. })
        ));
    }

    assert_eq!(provider.sign_in_calls.load(Ordering::SeqCst), 0);
    assert_eq!(presenter.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn given_signed_in_when_sign_in_again_then_rejected() {
    let (presenter, _transport) =
        ready_session(FakeTransport::new().fetch_returns(Ok(server_profile()))).await;

    let err = presenter.sign_in(EMAIL, PASSWORD).await.unwrap_err();

    assert!(matches!(err, SessionError::AlreadySignedIn { .. }));
    assert!(presenter.state().is_ready());
}

// =============================================================================
// Bootstrap
// =============================================================================

#[tokio::test]
async fn given_setup_incomplete_profile_when_bootstrap_then_ready_with_zero_weight() {
    let mut incomplete = Profile::fallback(identity());
    incomplete.is_first_login = true;

    let (presenter, _transport) =
        ready_session(FakeTransport::new().fetch_returns(Ok(incomplete))).await;

    let profile = presenter.profile().unwrap();
    assert_eq!(profile.identity().id(), UID);
    assert_eq!(profile.biometrics.weight_kg, 0.0);
    assert!(profile.is_first_login);
    assert!(presenter.state().is_ready());
}

#[tokio::test]
async fn given_complete_profile_when_bootstrap_then_ready_with_server_data() {
    let (mut presenter, transport) =
        ready_session(FakeTransport::new().fetch_returns(Ok(server_profile()))).await;

    assert_eq!(presenter.profile(), Some(server_profile()));
    assert_eq!(transport.fetch_calls.load(Ordering::SeqCst), 1);
    assert!(presenter.drain_notices().is_empty());
}

#[tokio::test]
async fn given_any_fetch_failure_when_bootstrap_then_ready_with_fallback() {
    for expected_kind in [
        FailureKind::NotFound,
        FailureKind::ServerError,
        FailureKind::NetworkError,
    ] {
        let error = match expected_kind {
            FailureKind::NotFound => TransportError::not_found("no record"),
            FailureKind::ServerError => TransportError::server_error(500, "boom"),
            FailureKind::NetworkError => TransportError::network("connection refused"),
        };
        let (mut presenter, _transport) =
            ready_session(FakeTransport::new().fetch_returns(Err(error))).await;

        let SessionState::Ready { profile } = presenter.state() else {
            panic!("expected Ready for {expected_kind}");
        };
        assert_eq!(profile, Profile::fallback(identity()));

        let notice = presenter.try_next_notice().unwrap();
        assert_eq!(notice.operation, PendingOperation::FetchProfile);
        assert_eq!(notice.kind, expected_kind);
    }
}

#[tokio::test]
async fn given_network_error_when_bootstrap_then_zeroed_profile_for_identity() {
    let (presenter, _transport) = ready_session(
        FakeTransport::new().fetch_returns(Err(TransportError::network("timed out"))),
    )
    .await;

    let profile = presenter.profile().unwrap();
    assert_eq!(profile.identity().id(), "u1");
    assert_eq!(profile.biometrics, Biometrics::default());
    assert_eq!(profile.goals().daily_kcal, 0);
    assert!(profile.goals().macros_target.is_empty());
}

#[tokio::test]
async fn given_fetch_in_flight_when_observed_then_bootstrapping_and_busy() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(
        FakeTransport::new()
            .fetch_returns(Ok(server_profile()))
            .gate_fetch(Arc::clone(&gate)),
    );
    let mut presenter = spawn_session(
        Arc::new(FakeIdentityProvider::with_default_account()),
        Arc::clone(&transport),
    );

    presenter.sign_in(EMAIL, PASSWORD).await.unwrap();

    let snapshot = presenter.snapshot();
    assert_eq!(
        snapshot.state,
        SessionState::Bootstrapping {
            identity: identity()
        }
    );
    assert_eq!(snapshot.pending, Some(PendingOperation::FetchProfile));
    assert!(matches!(
        presenter.begin_edit().await.unwrap_err(),
        SessionError::NotReady { .. }
    ));

    gate.notify_one();
    let profile = presenter.wait_until_ready().await.unwrap();
    assert_eq!(profile, server_profile());
}

#[tokio::test]
async fn given_existing_session_when_resume_then_bootstraps() {
    let transport = Arc::new(FakeTransport::new().fetch_returns(Ok(server_profile())));
    let mut presenter = spawn_session(
        Arc::new(FakeIdentityProvider::with_session(identity())),
        Arc::clone(&transport),
    );

    let resumed = presenter.resume().await.unwrap();

    assert_eq!(resumed, Some(identity()));
    assert_eq!(presenter.wait_until_ready().await.unwrap(), server_profile());
}

#[tokio::test]
async fn given_no_session_when_resume_then_stays_unauthenticated() {
    let transport = Arc::new(FakeTransport::new());
    let presenter = spawn_session(
        Arc::new(FakeIdentityProvider::with_default_account()),
        Arc::clone(&transport),
    );

    assert_eq!(presenter.resume().await.unwrap(), None);
    assert_eq!(presenter.state(), SessionState::Unauthenticated);
    assert_eq!(transport.fetch_calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Editing
// =============================================================================

#[tokio::test]
async fn given_ready_when_begin_edit_twice_then_draft_equals_last_synced() {
    let (presenter, _transport) =
        ready_session(FakeTransport::new().fetch_returns(Ok(server_profile()))).await;

    presenter.begin_edit().await.unwrap();
    let first = presenter.state();
    presenter.begin_edit().await.unwrap();
    let second = presenter.state();

    assert_eq!(first, second);
    let SessionState::Editing { draft, last_synced } = second else {
        panic!("expected Editing");
    };
    assert_eq!(draft, last_synced);
    assert_eq!(last_synced, server_profile());
}

#[tokio::test]
async fn given_draft_edits_when_begin_edit_again_then_edits_kept() {
    let (presenter, _transport) =
        ready_session(FakeTransport::new().fetch_returns(Ok(server_profile()))).await;

    presenter.begin_edit().await.unwrap();
    presenter
        .update_draft_field(DraftField::Name, "Mario")
        .await
        .unwrap();
    presenter.begin_edit().await.unwrap();

    assert_eq!(presenter.profile().unwrap().name, "Mario");
}

#[tokio::test]
async fn given_non_numeric_input_when_update_draft_then_prior_value_kept() {
    let (presenter, _transport) =
        ready_session(FakeTransport::new().fetch_returns(Ok(server_profile()))).await;
    presenter.begin_edit().await.unwrap();

    let update = presenter
        .update_draft_field(DraftField::Age, "thirty")
        .await
        .unwrap();
    let weight_update = presenter
        .update_draft_field(DraftField::WeightKg, "")
        .await
        .unwrap();

    assert_eq!(update, FieldUpdate::Retained);
    assert_eq!(weight_update, FieldUpdate::Retained);
    let draft = presenter.profile().unwrap();
    assert_eq!(draft.biometrics.age, 30);
    assert_eq!(draft.biometrics.weight_kg, 75.0);
}

#[tokio::test]
async fn given_not_editing_when_update_or_commit_then_rejected() {
    let (presenter, transport) =
        ready_session(FakeTransport::new().fetch_returns(Ok(server_profile()))).await;

    assert!(matches!(
        presenter
            .update_draft_field(DraftField::Name, "Mario")
            .await
            .unwrap_err(),
        SessionError::NotEditing { .. }
    ));
    assert!(matches!(
        presenter.commit_edit().await.unwrap_err(),
        SessionError::NotEditing { .. }
    ));
    assert_eq!(transport.submit_count(), 0);
}

#[tokio::test]
async fn given_unauthenticated_when_begin_edit_then_not_ready() {
    let presenter = spawn_session(
        Arc::new(FakeIdentityProvider::with_default_account()),
        Arc::new(FakeTransport::new()),
    );

    assert!(matches!(
        presenter.begin_edit().await.unwrap_err(),
        SessionError::NotReady { .. }
    ));
}

// =============================================================================
// Commit
// =============================================================================

#[tokio::test]
async fn given_edit_when_commit_succeeds_then_only_goals_replaced() {
    let server_goals = Goals::new(2200, BTreeMap::from([("protein".to_string(), 150)]));
    let (mut presenter, transport) = ready_session(
        FakeTransport::new()
            .fetch_returns(Ok(server_profile()))
            .submit_returns(Ok(server_goals.clone())),
    )
    .await;

    presenter.begin_edit().await.unwrap();
    presenter
        .update_draft_field(DraftField::Name, "Mario")
        .await
        .unwrap();
    presenter
        .update_draft_field(DraftField::WeightKg, "80.5")
        .await
        .unwrap();
    let draft = presenter.profile().unwrap();
    presenter.commit_edit().await.unwrap();
    let merged = presenter.wait_until_ready().await.unwrap();

    assert_eq!(merged.name, "Mario");
    assert_eq!(merged.biometrics, draft.biometrics);
    assert_eq!(merged.identity(), draft.identity());
    assert_eq!(merged.goals().daily_kcal, 2200);
    assert_eq!(merged.goals(), &server_goals);
    assert_eq!(transport.submitted.lock().unwrap().as_slice(), &[draft]);
    assert!(presenter.drain_notices().is_empty());
}

#[tokio::test]
async fn given_edit_when_commit_fails_then_draft_kept_and_notice_emitted() {
    let (mut presenter, _transport) = ready_session(
        FakeTransport::new()
            .fetch_returns(Ok(server_profile()))
            .submit_returns(Err(TransportError::server_error(500, "boom"))),
    )
    .await;

    presenter.begin_edit().await.unwrap();
    presenter
        .update_draft_field(DraftField::Name, "Mario")
        .await
        .unwrap();
    presenter.commit_edit().await.unwrap();
    let merged = presenter.wait_until_ready().await.unwrap();

    assert_eq!(merged.name, "Mario");
    assert_eq!(merged.goals(), server_profile().goals());

    let notice = presenter.try_next_notice().unwrap();
    assert_eq!(notice.operation, PendingOperation::SubmitEdit);
    assert_eq!(notice.kind, FailureKind::ServerError);
}

#[tokio::test]
async fn given_commit_in_flight_when_second_commit_then_rejected() {
    let gate = Arc::new(Notify::new());
    let (presenter, transport) = ready_session(
        FakeTransport::new()
            .fetch_returns(Ok(server_profile()))
            .submit_returns(Ok(Goals::new(2100, BTreeMap::new())))
            .gate_submit(Arc::clone(&gate)),
    )
    .await;
    let mut presenter = presenter;

    presenter.begin_edit().await.unwrap();
    presenter.commit_edit().await.unwrap();

    assert_eq!(presenter.snapshot().pending, Some(PendingOperation::SubmitEdit));
    assert!(matches!(
        presenter.commit_edit().await.unwrap_err(),
        SessionError::OperationInFlight {
            operation: PendingOperation::SubmitEdit,
            ..
        }
    ));
    assert!(matches!(
        presenter
            .update_draft_field(DraftField::Name, "Late")
            .await
            .unwrap_err(),
        SessionError::OperationInFlight { .. }
    ));
    assert!(matches!(
        presenter.begin_edit().await.unwrap_err(),
        SessionError::OperationInFlight { .. }
    ));

    gate.notify_one();
    let merged = presenter.wait_until_ready().await.unwrap();

    assert_eq!(merged.goals().daily_kcal, 2100);
    assert_eq!(merged.name, "Luigi");
    assert_eq!(transport.submit_count(), 1);
}

// =============================================================================
// Sign-out
// =============================================================================

#[tokio::test]
async fn given_fetch_in_flight_when_sign_out_then_late_completion_ignored() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(
        FakeTransport::new()
            .fetch_returns(Ok(server_profile()))
            .gate_fetch(Arc::clone(&gate)),
    );
    let mut presenter = spawn_session(
        Arc::new(FakeIdentityProvider::with_default_account()),
        Arc::clone(&transport),
    );

    presenter.sign_in(EMAIL, PASSWORD).await.unwrap();
    presenter.sign_out().await.unwrap();
    gate.notify_one();
    tokio::time::sleep(SETTLE).await;

    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.state, SessionState::Unauthenticated);
    assert_eq!(snapshot.pending, None);
    assert!(presenter.drain_notices().is_empty());
}

#[tokio::test]
async fn given_submit_in_flight_when_sign_out_then_late_completion_ignored() {
    let gate = Arc::new(Notify::new());
    let (mut presenter, transport) = ready_session(
        FakeTransport::new()
            .fetch_returns(Ok(server_profile()))
            .submit_returns(Err(TransportError::network("late failure")))
            .gate_submit(Arc::clone(&gate)),
    )
    .await;

    presenter.begin_edit().await.unwrap();
    presenter.commit_edit().await.unwrap();
    presenter.sign_out().await.unwrap();
    gate.notify_one();
    tokio::time::sleep(SETTLE).await;

    assert_eq!(presenter.state(), SessionState::Unauthenticated);
    assert!(presenter.drain_notices().is_empty());
    assert_eq!(transport.submit_count(), 1);
}

#[tokio::test]
async fn given_signed_out_when_sign_in_again_then_fresh_bootstrap() {
    let (mut presenter, transport) = ready_session(
        FakeTransport::new()
            .fetch_returns(Ok(server_profile()))
            .fetch_returns(Err(TransportError::not_found("gone"))),
    )
    .await;

    presenter.sign_out().await.unwrap();
    assert_eq!(presenter.state(), SessionState::Unauthenticated);

    presenter.sign_in(EMAIL, PASSWORD).await.unwrap();
    let profile = presenter.wait_until_ready().await.unwrap();

    assert_eq!(profile, Profile::fallback(identity()));
    assert_eq!(transport.fetch_calls.load(Ordering::SeqCst), 2);
}
