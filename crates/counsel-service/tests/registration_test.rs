//! Integration tests for the student registration workflow.

mod support;

use std::sync::Arc;

use counsel_core::error::ErrorKind;
use counsel_core::types::{CounselId, StudentId};
use counsel_entity::counsel::CounselStatus;
use counsel_service::RegistrationService;

use support::{FakeApi, counsel};

const STUDENT: StudentId = StudentId(42);

#[tokio::test]
async fn test_join_updates_local_state() {
    let api = Arc::new(FakeApi::with_counsels(vec![counsel(
        1,
        CounselStatus::Pending,
        1,
        5,
    )]));
    let mut service = RegistrationService::new(api.clone(), STUDENT);
    service.refresh().await.expect("refresh");

    service.join(CounselId::new(1)).await.expect("join");

    assert!(service.store().is_joined(CounselId::new(1)));
    assert_eq!(
        service
            .store()
            .get(CounselId::new(1))
            .unwrap()
            .current_participants,
        2
    );
    assert_eq!(api.register_calls(), 1);
}

#[tokio::test]
async fn test_join_rejected_when_full_without_network() {
    let api = Arc::new(FakeApi::with_counsels(vec![counsel(
        1,
        CounselStatus::Active,
        5,
        5,
    )]));
    let mut service = RegistrationService::new(api.clone(), STUDENT);
    service.refresh().await.expect("refresh");

    let err = service.join(CounselId::new(1)).await.expect_err("full");
    assert_eq!(err.kind, ErrorKind::Conflict);
    // The guard fired before any request was made.
    assert_eq!(api.register_calls(), 0);
}

#[tokio::test]
async fn test_join_twice_rejected() {
    let api = Arc::new(FakeApi::with_counsels(vec![counsel(
        1,
        CounselStatus::Pending,
        0,
        5,
    )]));
    let mut service = RegistrationService::new(api.clone(), STUDENT);
    service.refresh().await.expect("refresh");

    service.join(CounselId::new(1)).await.expect("first join");
    let err = service.join(CounselId::new(1)).await.expect_err("second join");
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(api.register_calls(), 1);
}

#[tokio::test]
async fn test_join_unknown_session_not_found() {
    let api = Arc::new(FakeApi::with_counsels(vec![]));
    let mut service = RegistrationService::new(api, STUDENT);
    service.refresh().await.expect("refresh");

    let err = service.join(CounselId::new(9)).await.expect_err("missing");
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_failed_join_rolls_back_to_server_state() {
    let api = Arc::new(FakeApi::with_counsels(vec![counsel(
        1,
        CounselStatus::Pending,
        2,
        5,
    )]));
    let mut service = RegistrationService::new(api.clone(), STUDENT);
    service.refresh().await.expect("refresh");

    api.fail_next_register(counsel_core::AppError::conflict("Session is full"));
    let err = service.join(CounselId::new(1)).await.expect_err("rejected");
    assert_eq!(err.kind, ErrorKind::Conflict);

    // The optimistic mutation must not survive: the store matches the
    // server's confirmed state again.
    let local = service.store().get(CounselId::new(1)).unwrap();
    let server = api.counsel(CounselId::new(1)).unwrap();
    assert_eq!(local.current_participants, server.current_participants);
    assert!(!service.store().is_joined(CounselId::new(1)));
}

#[tokio::test]
async fn test_cancel_removes_registration() {
    let api = Arc::new(FakeApi::with_counsels(vec![counsel(
        1,
        CounselStatus::Pending,
        0,
        5,
    )]));
    let mut service = RegistrationService::new(api.clone(), STUDENT);
    service.refresh().await.expect("refresh");
    service.join(CounselId::new(1)).await.expect("join");

    service.cancel(CounselId::new(1)).await.expect("cancel");

    assert!(!service.store().is_joined(CounselId::new(1)));
    assert_eq!(
        service
            .store()
            .get(CounselId::new(1))
            .unwrap()
            .current_participants,
        0
    );
    assert_eq!(api.cancel_calls(), 1);
}

#[tokio::test]
async fn test_cancel_without_registration_rejected() {
    let api = Arc::new(FakeApi::with_counsels(vec![counsel(
        1,
        CounselStatus::Pending,
        0,
        5,
    )]));
    let mut service = RegistrationService::new(api.clone(), STUDENT);
    service.refresh().await.expect("refresh");

    let err = service.cancel(CounselId::new(1)).await.expect_err("no reg");
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(api.cancel_calls(), 0);
}

#[tokio::test]
async fn test_refresh_marks_existing_registrations() {
    let api = Arc::new(FakeApi::with_counsels(vec![
        counsel(1, CounselStatus::Pending, 0, 5),
        counsel(2, CounselStatus::Pending, 0, 5),
    ]));
    api.seed_registration(CounselId::new(2), STUDENT);

    let mut service = RegistrationService::new(api, STUDENT);
    service.refresh().await.expect("refresh");

    assert!(!service.store().is_joined(CounselId::new(1)));
    assert!(service.store().is_joined(CounselId::new(2)));
}

#[tokio::test]
async fn test_student_stats_over_registrations() {
    let api = Arc::new(FakeApi::with_counsels(vec![
        counsel(1, CounselStatus::Completed, 1, 5),
        counsel(2, CounselStatus::Pending, 1, 5),
        counsel(3, CounselStatus::Pending, 1, 5),
        counsel(4, CounselStatus::Pending, 0, 5), // not registered
    ]));
    for id in [1, 2, 3] {
        api.seed_registration(CounselId::new(id), STUDENT);
    }

    let service = RegistrationService::new(api, STUDENT);
    let stats = service.stats().await.expect("stats");
    assert_eq!((stats.total, stats.completed, stats.upcoming), (3, 1, 2));
}
