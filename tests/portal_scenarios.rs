//! End-to-end portal scenarios over the public API

use chrono::NaiveDate;
use mediclean::bookings::parse_date;
use mediclean::{
    authorize, AccessDecision, BookingLedger, BookingStatus, FileStore, MemoryStore, Page,
    PlaceholderAuthenticator, SessionService, SessionState, SignupRequest, WasteType,
};
use tempfile::tempdir;

fn service(store: &MemoryStore) -> SessionService<MemoryStore, PlaceholderAuthenticator> {
    SessionService::new(store.clone(), PlaceholderAuthenticator)
}

#[tokio::test]
async fn login_then_authenticated() {
    let credentials = [
        ("jane@example.com", "secret"),
        ("a@b.c", "x"),
        ("ops@clinic.org", "correct horse battery staple"),
    ];

    for (email, password) in credentials {
        let store = MemoryStore::new();
        let mut session = service(&store);
        session.restore();

        session.login(email, password).await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.current().unwrap().email, email);
    }
}

#[tokio::test]
async fn logout_then_restore_is_anonymous() {
    let store = MemoryStore::new();
    let mut session = service(&store);
    session.restore();
    session.login("jane@example.com", "secret").await.unwrap();

    session.logout();
    assert_eq!(session.state(), &SessionState::Anonymous);

    let mut reloaded = service(&store);
    assert_eq!(reloaded.restore(), &SessionState::Anonymous);

    // Also from a never-restored service
    let mut fresh = service(&MemoryStore::new());
    fresh.logout();
    assert_eq!(fresh.state(), &SessionState::Anonymous);
}

#[tokio::test]
async fn signup_survives_reload() {
    let dir = tempdir().unwrap();

    let mut session = SessionService::new(FileStore::new(dir.path()), PlaceholderAuthenticator);
    session.restore();
    let request = SignupRequest::new("sam@eastside.org", "pw", "Sam Lee").facility("Eastside Clinic");
    let created = session.signup(request).await.unwrap();

    let mut reloaded = SessionService::new(FileStore::new(dir.path()), PlaceholderAuthenticator);
    let record = reloaded.restore().user().cloned().unwrap();
    assert_eq!(record, created);
    assert_eq!(record.email, "sam@eastside.org");
    assert_eq!(record.name, "Sam Lee");
    assert_eq!(record.facility_name.as_deref(), Some("Eastside Clinic"));
}

#[tokio::test]
async fn logout_twice_matches_once() {
    let once = MemoryStore::new();
    let twice = MemoryStore::new();

    let mut a = service(&once);
    let mut b = service(&twice);
    a.restore();
    b.restore();
    a.login("jane@example.com", "secret").await.unwrap();
    b.login("jane@example.com", "secret").await.unwrap();

    a.logout();
    b.logout();
    b.logout();

    assert_eq!(a.state(), b.state());
    assert_eq!(once.len(), twice.len());
    assert!(twice.is_empty());
}

#[test]
fn booking_form_then_cancel() {
    let mut ledger = BookingLedger::with_samples();
    let before = ledger.clone();
    let date = parse_date("2025-03-01").unwrap();

    let id = {
        let booking = ledger.schedule(date, "10:00 AM", WasteType::Sharps).unwrap();
        assert_eq!(booking.status, BookingStatus::Scheduled);
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(booking.time, "10:00 AM");
        assert_eq!(booking.waste_type, WasteType::Sharps);
        booking.id.clone()
    };
    assert_eq!(ledger.len(), before.len() + 1);
    assert_eq!(ledger.on_date(date).len(), 1);

    ledger.cancel(&id).unwrap();
    assert_eq!(ledger.get(&id).unwrap().status, BookingStatus::Canceled);

    for original in before.iter() {
        assert_eq!(ledger.get(&original.id), Some(original));
    }
}

#[tokio::test]
async fn gated_pages_follow_session() {
    let store = MemoryStore::new();
    let mut session = service(&store);

    for page in [Page::Dashboard, Page::Bookings, Page::Profile] {
        assert_eq!(authorize(page, session.state()), AccessDecision::Pending);
    }

    session.restore();
    for page in [Page::Dashboard, Page::Bookings, Page::Profile] {
        assert_eq!(
            authorize(page, session.state()),
            AccessDecision::Redirect(Page::Login)
        );
    }
    assert_eq!(authorize(Page::Home, session.state()), AccessDecision::Render);

    session.login("jane@example.com", "secret").await.unwrap();
    for page in [Page::Dashboard, Page::Bookings, Page::Profile] {
        assert_eq!(authorize(page, session.state()), AccessDecision::Render);
    }
}
