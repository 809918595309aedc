use std::cell::{Cell, RefCell};
use std::pin::pin;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::{LoginResponse, User};
use crate::state::toast::ToastKind;

// =============================================================
// Fakes
// =============================================================

struct FakeGateway {
    reply: Result<LoginResponse, ApiError>,
    calls: RefCell<Vec<Credentials>>,
}

impl FakeGateway {
    fn replying(reply: Result<LoginResponse, ApiError>) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl AuthGateway for FakeGateway {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(credentials.clone());
        self.reply.clone()
    }
}

#[derive(Default)]
struct RecordingSession {
    established: RefCell<Vec<(String, User)>>,
}

impl SessionSink for RecordingSession {
    fn establish(&self, token: &str, user: &User) {
        self.established.borrow_mut().push((token.to_owned(), user.clone()));
    }
}

#[derive(Default)]
struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

#[derive(Default)]
struct RecordingNotifier {
    toasts: RefCell<Vec<(ToastKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.borrow_mut().push((kind, message.to_owned()));
    }
}

/// Gateway whose reply arrives only when the test sends it.
struct PendingGateway {
    reply: RefCell<Option<oneshot::Receiver<Result<LoginResponse, ApiError>>>>,
    calls: Cell<usize>,
}

impl PendingGateway {
    fn new() -> (Self, oneshot::Sender<Result<LoginResponse, ApiError>>) {
        let (tx, rx) = oneshot::channel();
        let gateway = Self {
            reply: RefCell::new(Some(rx)),
            calls: Cell::new(0),
        };
        (gateway, tx)
    }
}

impl AuthGateway for PendingGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        let rx = self.reply.borrow_mut().take();
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("dropped".to_owned()))),
            None => Err(ApiError::Transport("already used".to_owned())),
        }
    }
}

struct Harness {
    session: RecordingSession,
    navigator: RecordingNavigator,
    notifier: RecordingNotifier,
}

impl Harness {
    fn new() -> Self {
        Self {
            session: RecordingSession::default(),
            navigator: RecordingNavigator::default(),
            notifier: RecordingNotifier::default(),
        }
    }

    fn submit(&self, gateway: &FakeGateway) -> LoginOutcome {
        block_on(submit_login(
            gateway,
            &credentials(),
            &self.session,
            &self.navigator,
            &self.notifier,
        ))
    }
}

fn credentials() -> Credentials {
    Credentials::new("agent@realestate.test", "s3cret")
}

fn alice() -> User {
    serde_json::from_value(serde_json::json!({"_id": "u-1", "name": "Alice"})).unwrap()
}

fn success_response() -> LoginResponse {
    LoginResponse {
        success: true,
        token: Some("jwt-abc".to_owned()),
        user: Some(alice()),
        message: None,
    }
}

// =============================================================
// Success
// =============================================================

#[test]
fn success_establishes_session_notifies_and_navigates_home_once() {
    let harness = Harness::new();
    let gateway = FakeGateway::replying(Ok(success_response()));

    assert_eq!(harness.submit(&gateway), LoginOutcome::LoggedIn);

    assert_eq!(*gateway.calls.borrow(), vec![credentials()]);
    assert_eq!(
        *harness.session.established.borrow(),
        vec![("jwt-abc".to_owned(), alice())]
    );
    assert_eq!(
        *harness.notifier.toasts.borrow(),
        vec![(ToastKind::Success, LOGIN_SUCCESS_MESSAGE.to_owned())]
    );
    assert_eq!(*harness.navigator.paths.borrow(), vec!["/".to_owned()]);
}

// =============================================================
// Rejection
// =============================================================

#[test]
fn rejection_shows_backend_message_without_session_or_navigation() {
    let harness = Harness::new();
    let gateway = FakeGateway::replying(Ok(LoginResponse {
        success: false,
        message: Some("Invalid credentials".to_owned()),
        ..LoginResponse::default()
    }));

    assert_eq!(
        harness.submit(&gateway),
        LoginOutcome::Rejected("Invalid credentials".to_owned())
    );

    assert!(harness.session.established.borrow().is_empty());
    assert!(harness.navigator.paths.borrow().is_empty());
    let toasts = harness.notifier.toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, ToastKind::Error);
    assert!(toasts[0].1.contains("Invalid credentials"));
}

#[test]
fn rejection_without_message_uses_fallback() {
    let harness = Harness::new();
    let gateway = FakeGateway::replying(Ok(LoginResponse::default()));

    assert_eq!(
        harness.submit(&gateway),
        LoginOutcome::Rejected(LOGIN_REJECTED_FALLBACK.to_owned())
    );
    assert_eq!(
        *harness.notifier.toasts.borrow(),
        vec![(ToastKind::Error, LOGIN_REJECTED_FALLBACK.to_owned())]
    );
}

#[test]
fn rejection_message_trims_and_falls_back_on_blank() {
    assert_eq!(rejection_message(Some("  User not found ")), "User not found");
    assert_eq!(rejection_message(Some("   ")), LOGIN_REJECTED_FALLBACK);
    assert_eq!(rejection_message(None), LOGIN_REJECTED_FALLBACK);
}

// =============================================================
// Failure
// =============================================================

#[test]
fn network_failure_shows_generic_error_only() {
    let harness = Harness::new();
    let gateway =
        FakeGateway::replying(Err(ApiError::Transport("connection refused".to_owned())));

    assert_eq!(harness.submit(&gateway), LoginOutcome::Failed);

    assert!(harness.session.established.borrow().is_empty());
    assert!(harness.navigator.paths.borrow().is_empty());
    assert_eq!(
        *harness.notifier.toasts.borrow(),
        vec![(ToastKind::Error, LOGIN_ERROR_MESSAGE.to_owned())]
    );
}

#[test]
fn error_status_is_treated_as_failure() {
    let harness = Harness::new();
    let gateway = FakeGateway::replying(Err(ApiError::Status(401)));

    assert_eq!(harness.submit(&gateway), LoginOutcome::Failed);
    assert_eq!(
        *harness.notifier.toasts.borrow(),
        vec![(ToastKind::Error, LOGIN_ERROR_MESSAGE.to_owned())]
    );
}

#[test]
fn success_without_token_is_a_failure_not_a_session() {
    let harness = Harness::new();
    let gateway = FakeGateway::replying(Ok(LoginResponse {
        token: None,
        ..success_response()
    }));

    assert_eq!(harness.submit(&gateway), LoginOutcome::Failed);
    assert!(harness.session.established.borrow().is_empty());
    assert!(harness.navigator.paths.borrow().is_empty());
    assert_eq!(harness.notifier.toasts.borrow().len(), 1);
}

// =============================================================
// Single attempt
// =============================================================

#[test]
fn each_submission_sends_exactly_one_request() {
    let harness = Harness::new();
    let gateway = FakeGateway::replying(Err(ApiError::Transport("timeout".to_owned())));
    harness.submit(&gateway);
    assert_eq!(gateway.calls.borrow().len(), 1);
}

#[test]
fn navigate_closures_act_as_navigators() {
    let visited = Cell::new(0_usize);
    let navigate = |path: &str, _options: NavigateOptions| {
        assert_eq!(path, HOME_PATH);
        visited.set(visited.get() + 1);
    };
    navigate.navigate(HOME_PATH);
    assert_eq!(visited.get(), 1);
}

// =============================================================
// Form bracket
// =============================================================

fn filled_form() -> RwSignal<LoginForm> {
    let mut form = LoginForm::default();
    form.credentials = credentials();
    RwSignal::new(form)
}

fn run(
    harness: &Harness,
    form: RwSignal<LoginForm>,
    gateway: &FakeGateway,
) -> Option<LoginOutcome> {
    block_on(run_submission(
        form,
        gateway,
        &harness.session,
        &harness.navigator,
        &harness.notifier,
    ))
}

#[test]
fn run_submission_reenables_submit_after_every_outcome() {
    let replies = [
        (Ok(success_response()), LoginOutcome::LoggedIn),
        (
            Ok(LoginResponse {
                success: false,
                message: Some("Invalid credentials".to_owned()),
                ..LoginResponse::default()
            }),
            LoginOutcome::Rejected("Invalid credentials".to_owned()),
        ),
        (Err(ApiError::Transport("offline".to_owned())), LoginOutcome::Failed),
    ];
    let owner = Owner::new();
    owner.with(|| {
        for (reply, expected) in replies {
            let harness = Harness::new();
            let form = filled_form();
            let gateway = FakeGateway::replying(reply);

            assert_eq!(run(&harness, form, &gateway), Some(expected));
            assert!(!form.get_untracked().loading);
            assert!(!form.get_untracked().submit_disabled());
            assert_eq!(*gateway.calls.borrow(), vec![credentials()]);
        }
    });
}

#[test]
fn run_submission_refused_while_request_pending() {
    let owner = Owner::new();
    owner.with(|| {
        let harness = Harness::new();
        let form = filled_form();
        let (gateway, reply) = PendingGateway::new();

        block_on(async {
            let mut first = pin!(run_submission(
                form,
                &gateway,
                &harness.session,
                &harness.navigator,
                &harness.notifier,
            ));
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(form.get_untracked().loading);
            assert!(form.with_untracked(LoginForm::submit_disabled));

            let second = run_submission(
                form,
                &gateway,
                &harness.session,
                &harness.navigator,
                &harness.notifier,
            )
            .await;
            assert_eq!(second, None);
            assert_eq!(gateway.calls.get(), 1);

            reply.send(Ok(success_response())).unwrap();
            assert_eq!(first.await, Some(LoginOutcome::LoggedIn));
        });

        assert!(!form.get_untracked().loading);
        assert_eq!(harness.navigator.paths.borrow().len(), 1);
    });
}

#[test]
fn run_submission_sends_nothing_when_already_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let harness = Harness::new();
        let form = filled_form();
        form.update(|f| f.loading = true);
        let gateway = FakeGateway::replying(Ok(success_response()));

        assert_eq!(run(&harness, form, &gateway), None);
        assert!(gateway.calls.borrow().is_empty());
        assert!(harness.notifier.toasts.borrow().is_empty());
        assert!(form.get_untracked().loading);
    });
}
