use crate::{
    api::Role,
    router::{self, Destination, Redirect, LOGIN_PATH},
    state::{
        auth::{use_auth, AuthState},
        flash::{use_flash, Flash},
    },
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to continue.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// `notify` is false right after an explicit logout.
    ToLogin { notify: bool },
    ToDashboard(Destination),
}

pub fn guard_decision(required: &Role, state: &AuthState) -> GuardDecision {
    let to_login = GuardDecision::ToLogin {
        notify: !state.signed_out,
    };
    let Some(user) = state.user.as_ref().filter(|_| state.is_authenticated) else {
        return to_login;
    };
    if &user.role == required {
        return GuardDecision::Render;
    }
    match router::dispatch(&user.role) {
        Redirect::To(destination) => GuardDecision::ToDashboard(destination),
        Redirect::Stay { .. } => to_login,
    }
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let flash = use_flash();
    let navigate = use_navigate();
    let decision = create_memo(move |_| auth.with(|state| guard_decision(&role, state)));

    create_effect(move |_| match decision.get() {
        GuardDecision::Render => {}
        GuardDecision::ToLogin { notify } => {
            if notify {
                flash.set(Flash::Error(LOGIN_REQUIRED_MESSAGE.to_string()));
            }
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
        GuardDecision::ToDashboard(destination) => {
            navigate(destination.path(), NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}
