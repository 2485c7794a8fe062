//! Drives the client shell against a real backend on an ephemeral port.

use std::sync::Arc;

use portal_api::{build_router, AppState};
use portal_client::{
    HttpContactApi, MemoryStorage, NavLink, Notification, PortalApp, RecordingNotifier, Route,
    SubmissionOutcome,
};
use portal_core::repositories::ContactRepository;
use portal_core::NewContact;
use portal_infrastructure::InMemoryContactRepository;
use portal_shared::config::{ClientSettings, ServerSettings};
use tokio::net::TcpListener;

type E2eApp = PortalApp<MemoryStorage, HttpContactApi, RecordingNotifier>;

async fn spawn_server() -> (String, Arc<InMemoryContactRepository>) {
    let repo = Arc::new(InMemoryContactRepository::new());
    let settings = ServerSettings {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 5,
        allowed_origin: "http://localhost:5173".to_string(),
    };
    let router = build_router(AppState::new(repo.clone()), &settings).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), repo)
}

fn client_app(base_url: &str) -> (E2eApp, RecordingNotifier) {
    let settings = ClientSettings {
        base_url: base_url.to_string(),
        timeout_ms: 2_000,
        retry_attempts: 1,
        state_file: String::new(),
    };
    let notifier = RecordingNotifier::new();
    let api = HttpContactApi::new(&settings).unwrap();
    (PortalApp::new(MemoryStorage::new(), api, notifier.clone()), notifier)
}

fn fill_form(app: &mut E2eApp) {
    app.session_mut().set_name("John Doe");
    app.session_mut().set_email("john.doe@example.com");
    app.session_mut().set_message("This is a test message");
}

#[tokio::test]
async fn test_login_navigate_submit_logout() {
    let (base_url, repo) = spawn_server().await;
    let (mut app, notifier) = client_app(&base_url);

    assert_eq!(app.start("/login"), Route::Login);
    app.session_mut().set_username("admin");
    app.session_mut().set_password("password");
    assert!(app.login().unwrap());
    assert_eq!(app.location(), Route::Home);
    assert_eq!(app.location().page().body, Some("This is the home page content"));

    assert_eq!(app.follow_link(NavLink::Home), Route::Home);
    assert_eq!(app.follow_link(NavLink::About), Route::About);
    assert_eq!(app.follow_link(NavLink::Services), Route::Services);
    assert_eq!(app.follow_link(NavLink::Contact), Route::Contact);
    assert_eq!(app.location().page().heading, "Contact Us");

    let form_link = app.location().page().link.unwrap();
    assert_eq!(form_link.text, "Fill out the contact form");
    assert_eq!(app.navigate(form_link.to.path()), Route::ContactForm);

    fill_form(&mut app);
    let record = match app.submit_contact().await {
        SubmissionOutcome::Submitted(record) => record,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(notifier.notifications(), vec![Notification::SubmissionSucceeded]);
    assert_eq!(app.session().contact_form(), NewContact::default());

    let stored = repo.list_all().await.unwrap();
    assert_eq!(stored, vec![record]);

    app.logout().unwrap();
    assert_eq!(app.location(), Route::Login);
    assert!(!app.layout().show_logout);
}

#[tokio::test]
async fn test_submitted_record_is_listed() {
    let (base_url, _repo) = spawn_server().await;
    let (mut app, _notifier) = client_app(&base_url);

    app.start("/");
    app.session_mut().set_username("admin");
    app.session_mut().set_password("password");
    app.login().unwrap();
    app.navigate("/contact/form");

    for _ in 0..2 {
        fill_form(&mut app);
        assert!(matches!(app.submit_contact().await, SubmissionOutcome::Submitted(_)));
    }

    let listed = app.list_contacts().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_ne!(listed[0].id, listed[1].id);
    for record in &listed {
        assert_eq!(
            record.fields(),
            NewContact::new("John Doe", "john.doe@example.com", "This is a test message")
        );
    }
}

#[tokio::test]
async fn test_unreachable_backend_keeps_form() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (mut app, notifier) = client_app(&format!("http://{}", addr));
    app.start("/");
    app.session_mut().set_username("admin");
    app.session_mut().set_password("password");
    app.login().unwrap();
    app.navigate("/contact/form");
    fill_form(&mut app);

    assert_eq!(app.submit_contact().await, SubmissionOutcome::Failed);
    assert_eq!(notifier.notifications(), vec![Notification::SubmissionFailed]);
    assert_eq!(app.session().name(), "John Doe");
}
