use crate::{
    api::{Credentials, LoginError},
    components::toast::{use_toasts, Toasts},
    router::Redirect,
    state::{
        auth::{self, RequestState},
        flash::{use_flash, Flash, FlashSlot},
    },
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub identifier: RwSignal<String>,
    pub secret: RwSignal<String>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            identifier: create_rw_signal(String::new()),
            secret: create_rw_signal(String::new()),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.identifier.get_untracked(), self.secret.get_untracked())
    }

    pub fn clear(&self) {
        self.identifier.set(String::new());
        self.secret.set(String::new());
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub request_state: RwSignal<RequestState>,
    pub login_action: Action<Credentials, Result<Redirect, LoginError>>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        let request_state = create_rw_signal(RequestState::Idle);
        Self {
            form: LoginFormState::new(),
            request_state,
            login_action: auth::use_login_action(request_state),
        }
    }

    /// Dispatches the typed credentials unless a submission is already
    /// running. The action's pending flag is set synchronously on dispatch,
    /// so a second click before the request starts is also ignored.
    pub fn submit(&self) {
        if self.request_state.get_untracked().is_in_flight()
            || self.login_action.pending().get_untracked()
        {
            log::debug!("Ignoring submit while a login request is in flight");
            return;
        }
        self.login_action.dispatch(self.form.credentials());
    }

    pub fn pending(&self) -> Signal<bool> {
        let request_state = self.request_state;
        Signal::derive(move || request_state.get().is_in_flight())
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let vm = LoginViewModel::new();
    let LoginViewModel {
        form, login_action, ..
    } = vm;
    let toasts = use_toasts();
    let flash = use_flash();
    let navigate = use_navigate();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            if let Some(path) = apply_login_result(result, form, flash, toasts) {
                navigate(path, NavigateOptions::default());
            }
        }
    });

    vm
}

/// Turns a finished submission into its side effects and returns the path to
/// navigate to, if any.
pub fn apply_login_result(
    result: Result<Redirect, LoginError>,
    form: LoginFormState,
    flash: FlashSlot,
    toasts: Toasts,
) -> Option<&'static str> {
    match result {
        Ok(Redirect::To(destination)) => {
            form.clear();
            flash.set(Flash::Welcome);
            Some(destination.path())
        }
        Ok(Redirect::Stay { .. }) | Err(LoginError::InFlight) => None,
        Err(err) => {
            log::error!("Login error [{}]: {:?}", err.code(), err);
            toasts.error(err.to_string());
            None
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::components::toast::Severity;
    use crate::router::Destination;
    use crate::state::session::SessionContext;
    use crate::test_support::ssr::with_runtime;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn setup() -> (LoginFormState, FlashSlot, Toasts) {
        let form = LoginFormState::new();
        form.identifier.set("a@b.com".into());
        form.secret.set("x".into());
        (form, FlashSlot::new(), Toasts::new())
    }

    #[test]
    fn success_sets_welcome_flag_and_returns_destination() {
        with_runtime(|| {
            let (form, flash, toasts) = setup();
            let path = apply_login_result(
                Ok(Redirect::To(Destination::StudentDashboard)),
                form,
                flash,
                toasts,
            );
            assert_eq!(path, Some("/student-dashboard"));
            assert_eq!(flash.peek(), Some(Flash::Welcome));
            assert!(toasts.snapshot().is_empty());
            assert_eq!(form.credentials(), Credentials::default());
        });
    }

    #[test]
    fn errors_surface_their_exact_message() {
        with_runtime(|| {
            let cases = [
                (LoginError::MissingCredentials, "Please fill in both fields."),
                (LoginError::UserNotFound, "User not found. Please try again."),
                (
                    LoginError::IncorrectPassword,
                    "Incorrect password. Please try again.",
                ),
                (
                    LoginError::failed("Unexpected status 503"),
                    "Login failed. Please try again.",
                ),
            ];
            for (error, message) in cases {
                let (form, flash, toasts) = setup();
                assert_eq!(apply_login_result(Err(error), form, flash, toasts), None);
                let shown = toasts.snapshot();
                assert_eq!(shown.len(), 1);
                assert_eq!(shown[0].severity, Severity::Error);
                assert_eq!(shown[0].message, message);
                assert_eq!(flash.peek(), None);
                // Typed values survive so the user can correct and resubmit.
                assert_eq!(form.credentials(), Credentials::new("a@b.com", "x"));
            }
        });
    }

    #[test]
    fn unknown_role_is_silent() {
        with_runtime(|| {
            let (form, flash, toasts) = setup();
            let path = apply_login_result(
                Ok(Redirect::Stay {
                    role: "Guest".into(),
                }),
                form,
                flash,
                toasts,
            );
            assert_eq!(path, None);
            assert!(toasts.snapshot().is_empty());
            assert_eq!(flash.peek(), None);
        });
    }

    #[test]
    fn rejected_double_submit_is_silent() {
        with_runtime(|| {
            let (form, flash, toasts) = setup();
            assert_eq!(
                apply_login_result(Err(LoginError::InFlight), form, flash, toasts),
                None
            );
            assert!(toasts.snapshot().is_empty());
        });
    }

    #[tokio::test]
    async fn double_submit_sends_a_single_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/users/login");
                then.status(200)
                    .delay(Duration::from_millis(150))
                    .json_body(json!({ "role": "Student", "name": "Asha" }));
            })
            .await;

        // Actions spawn onto the current task set on the host.
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let session = SessionContext::in_memory();
                provide_context(ApiClient::new_with_base_url(server.base_url()));
                provide_context(session.clone());

                let vm = LoginViewModel::new();
                vm.form.identifier.set("a@b.com".into());
                vm.form.secret.set("x".into());

                vm.submit();
                vm.submit();
                tokio::task::yield_now().await;
                assert!(vm.request_state.get_untracked().is_in_flight());
                vm.submit();

                for _ in 0..200 {
                    if vm.login_action.value().get_untracked().is_some() {
                        break;
                    }
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }

                assert_eq!(
                    vm.login_action.value().get_untracked(),
                    Some(Ok(Redirect::To(Destination::StudentDashboard)))
                );
                assert_eq!(vm.login_action.version().get_untracked(), 1);
                assert_eq!(vm.request_state.get_untracked(), RequestState::Succeeded);
                assert!(session.read().is_some());
                runtime.dispose();
            })
            .await;

        assert_eq!(mock.hits_async().await, 1);
    }
}
