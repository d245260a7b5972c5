use crate::{components::toast::use_toasts, state::flash::use_flash};
use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    // An error handed over by the previous page (e.g. a role guard).
    use_toasts().relay_flash_error(use_flash());
    view! {
        <Title text="Login"/>
        <LoginPanel />
    }
}
