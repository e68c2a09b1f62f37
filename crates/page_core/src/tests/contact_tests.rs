use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use super::*;
use axum::{extract::State, http::StatusCode, routing::post, Form, Router};
use serde_json::json;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone)]
struct EndpointState {
    reply_status: StatusCode,
    reply_body: String,
    received: Arc<Mutex<Vec<ContactFormRecord>>>,
}

async fn handle_contact(
    State(state): State<EndpointState>,
    Form(record): Form<ContactFormRecord>,
) -> (StatusCode, String) {
    state.received.lock().await.push(record);
    (state.reply_status, state.reply_body.clone())
}

async fn spawn_contact_endpoint(
    reply_status: StatusCode,
    reply_body: impl Into<String>,
) -> (Url, Arc<Mutex<Vec<ContactFormRecord>>>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = EndpointState {
        reply_status,
        reply_body: reply_body.into(),
        received: received.clone(),
    };
    let app = Router::new()
        .route("/contact_form.php", post(handle_contact))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let site = Url::parse(&format!("http://{addr}/")).expect("site url");
    (site, received)
}

fn sample_record() -> ContactFormRecord {
    ContactFormRecord {
        name: "A".into(),
        email: "a@b.com".into(),
        organization: String::new(),
        message: "hi".into(),
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    let record = sample_record();
    for field in ContactField::ALL {
        form.update_field(field, record.field(field));
    }
    form
}

/// Replies with a fixed result and counts calls.
struct StubTransport {
    reply: fn() -> Result<ContactSubmitResponse, ContactError>,
    calls: AtomicUsize,
}

impl StubTransport {
    fn new(reply: fn() -> Result<ContactSubmitResponse, ContactError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ContactTransport for StubTransport {
    async fn post_contact(
        &self,
        _record: &ContactFormRecord,
    ) -> Result<ContactSubmitResponse, ContactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.reply)()
    }
}

#[tokio::test]
async fn posts_form_encoded_fields_to_endpoint() {
    let (site, received) =
        spawn_contact_endpoint(StatusCode::OK, json!({ "success": true }).to_string()).await;
    let transport = HttpContactTransport::for_site(&site, "contact_form.php", DEFAULT_REQUEST_TIMEOUT)
        .expect("transport");
    assert_eq!(transport.endpoint().path(), "/contact_form.php");

    let response = transport
        .post_contact(&sample_record())
        .await
        .expect("post contact");

    assert!(response.succeeded());
    assert_eq!(received.lock().await.as_slice(), &[sample_record()]);
}

#[tokio::test]
async fn success_reply_clears_record_and_shows_one_success_toast() {
    let (site, _received) =
        spawn_contact_endpoint(StatusCode::OK, json!({ "success": true }).to_string()).await;
    let transport = HttpContactTransport::for_site(&site, "contact_form.php", DEFAULT_REQUEST_TIMEOUT)
        .expect("transport");
    let mut form = filled_form();
    let mut toasts = ToastQueue::new();

    let outcome = form.submit(&transport, &mut toasts).await.expect("submit");

    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert!(form.record().is_empty());
    assert!(!form.is_in_flight());
    assert_eq!(toasts.len(), 1);
    let toast = toasts.iter().next().expect("toast");
    assert_eq!(toast.kind(), ToastKind::Success);
    assert_eq!(toast.message(), CONTACT_SUCCESS_MESSAGE);
}

#[tokio::test]
async fn rejected_reply_keeps_record_and_shows_one_error_toast() {
    let (site, _received) =
        spawn_contact_endpoint(StatusCode::OK, json!({ "success": false }).to_string()).await;
    let transport = HttpContactTransport::for_site(&site, "contact_form.php", DEFAULT_REQUEST_TIMEOUT)
        .expect("transport");
    let mut form = filled_form();
    let mut toasts = ToastQueue::new();

    let outcome = form.submit(&transport, &mut toasts).await.expect("submit");

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(form.record(), &sample_record());
    assert_eq!(toasts.len(), 1);
    let toast = toasts.iter().next().expect("toast");
    assert_eq!(toast.kind(), ToastKind::Error);
    assert_eq!(toast.message(), CONTACT_FAILURE_MESSAGE);
}

#[tokio::test]
async fn error_status_with_json_body_is_judged_by_body() {
    let (site, _received) = spawn_contact_endpoint(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "success": false, "message": "smtp down" }).to_string(),
    )
    .await;
    let transport = HttpContactTransport::for_site(&site, "contact_form.php", DEFAULT_REQUEST_TIMEOUT)
        .expect("transport");

    assert_eq!(
        deliver(&transport, &sample_record()).await,
        SubmitOutcome::Rejected
    );
}

#[tokio::test]
async fn non_json_reply_is_a_network_error() {
    let (site, _received) =
        spawn_contact_endpoint(StatusCode::OK, "<html>Fatal error</html>").await;
    let transport = HttpContactTransport::for_site(&site, "contact_form.php", DEFAULT_REQUEST_TIMEOUT)
        .expect("transport");

    let err = transport
        .post_contact(&sample_record())
        .await
        .expect_err("html body must not decode");
    assert!(matches!(err, ContactError::Decode(_)));

    let mut form = filled_form();
    let mut toasts = ToastQueue::new();
    let outcome = form.submit(&transport, &mut toasts).await.expect("submit");
    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(form.record(), &sample_record());
    assert_eq!(toasts.len(), 1);
    assert_eq!(
        toasts.iter().next().expect("toast").message(),
        CONTACT_NETWORK_ERROR_MESSAGE
    );
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let site = Url::parse(&format!("http://{addr}/")).expect("site url");
    let transport = HttpContactTransport::for_site(&site, "contact_form.php", DEFAULT_REQUEST_TIMEOUT)
        .expect("transport");
    let mut form = filled_form();
    let mut toasts = ToastQueue::new();

    let outcome = form.submit(&transport, &mut toasts).await.expect("submit");

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(form.record(), &sample_record());
    assert_eq!(toasts.len(), 1);
    assert_eq!(
        toasts.iter().next().expect("toast").kind(),
        ToastKind::Error
    );
}

#[tokio::test]
async fn timeout_maps_to_network_error() {
    let transport = StubTransport::new(|| Err(ContactError::Timeout));
    let mut form = filled_form();
    let mut toasts = ToastQueue::new();

    let outcome = form.submit(&transport, &mut toasts).await.expect("submit");

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    assert_eq!(form.record(), &sample_record());
}

#[test]
fn second_submit_is_refused_while_first_is_in_flight() {
    let mut form = filled_form();
    let record = form.begin_submit().expect("first submit");
    assert_eq!(record, sample_record());
    assert!(form.is_in_flight());
    assert!(!form.can_submit());
    assert_eq!(form.begin_submit(), Err(SubmissionInFlight));

    let mut toasts = ToastQueue::new();
    form.finish_submit(SubmitOutcome::Rejected, &mut toasts, Instant::now());
    assert!(!form.is_in_flight());
    assert!(form.can_submit());
    assert_eq!(toasts.len(), 1);
}

#[test]
fn edits_during_flight_are_cleared_by_success() {
    let mut form = filled_form();
    form.begin_submit().expect("submit");
    form.update_field(ContactField::Organization, "Acme");

    let mut toasts = ToastQueue::new();
    form.finish_submit(SubmitOutcome::Delivered, &mut toasts, Instant::now());

    assert!(form.record().is_empty());
}

#[test]
fn invalid_endpoint_is_reported() {
    let site = Url::parse("http://example.test/").expect("site url");
    let err = HttpContactTransport::for_site(&site, "http://[::1", DEFAULT_REQUEST_TIMEOUT)
        .err()
        .expect("bad endpoint");
    assert!(matches!(err, ContactError::InvalidEndpoint { .. }));
}
