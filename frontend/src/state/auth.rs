use crate::{
    api::{ApiClient, AuthResult, Credentials, LoginError},
    pages::login::{repository::LoginRepository, utils as login_utils},
    router::{self, Redirect},
    state::session::{use_session, SessionContext},
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthResult>,
    pub is_authenticated: bool,
    /// Set by an explicit logout so guards do not complain about it.
    pub signed_out: bool,
}

impl AuthState {
    fn from_session(session: &SessionContext) -> Self {
        let user = session.read();
        Self {
            is_authenticated: user.is_some(),
            user,
            signed_out: false,
        }
    }
}

/// Lifecycle of one login submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestState {
    pub fn is_in_flight(self) -> bool {
        self == RequestState::InFlight
    }
}

fn create_auth_context(session: &SessionContext) -> AuthContext {
    let restored = AuthState::from_session(session);
    if let Some(user) = &restored.user {
        log::info!("Restored {} session from storage", user.role);
    }
    create_signal(restored)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = use_session();
    let ctx = create_auth_context(&session);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Runs one submission end to end: in-flight guard, validation, the HTTP
/// exchange, then the session write, which always happens before the caller
/// navigates.
pub async fn login_request(
    credentials: Credentials,
    repo: &LoginRepository,
    session: &SessionContext,
    request_state: RwSignal<RequestState>,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Redirect, LoginError> {
    if request_state.get_untracked().is_in_flight() {
        return Err(LoginError::InFlight);
    }
    login_utils::validate_credentials(&credentials)?;

    request_state.set(RequestState::InFlight);
    let outcome = authenticate_and_store(&credentials, repo, session, set_auth_state).await;
    request_state.set(if outcome.is_ok() {
        RequestState::Succeeded
    } else {
        RequestState::Failed
    });
    outcome
}

async fn authenticate_and_store(
    credentials: &Credentials,
    repo: &LoginRepository,
    session: &SessionContext,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Redirect, LoginError> {
    let user = repo.login(credentials).await?;
    session
        .write(&user)
        .map_err(|e| LoginError::failed(e.to_string()))?;
    let redirect = router::dispatch(&user.role);
    if let Redirect::Stay { role } = &redirect {
        log::warn!("Login succeeded with unrecognised role `{}`", role);
    }
    set_auth_state.set(AuthState {
        user: Some(user),
        is_authenticated: true,
        signed_out: false,
    });
    Ok(redirect)
}

pub fn logout(session: &SessionContext, set_auth_state: WriteSignal<AuthState>) {
    if let Err(err) = session.clear() {
        log::error!("Failed to clear session: {}", err);
    }
    set_auth_state.set(AuthState {
        user: None,
        is_authenticated: false,
        signed_out: true,
    });
}

pub fn use_login_action(
    request_state: RwSignal<RequestState>,
) -> Action<Credentials, Result<Redirect, LoginError>> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { login_request(payload, &repo, &session, request_state, set_auth).await }
    })
}
