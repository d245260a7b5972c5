#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::AuthResult;
    use crate::state::auth::AuthState;
    use leptos::*;
    use serde_json::json;

    pub fn auth_result(role: &str) -> AuthResult {
        serde_json::from_value(json!({
            "role": role,
            "name": format!("{} User", role),
            "email": format!("{}@campus.test", role.to_lowercase()),
            "token": "session-token"
        }))
        .unwrap()
    }

    pub fn provide_auth(
        user: Option<AuthResult>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            signed_out: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
