use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    #[prop(into)] identifier: Signal<String>,
    #[prop(into)] secret: Signal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_identifier_input: Callback<String>,
    on_secret_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form
            class="w-full md:w-1/2 flex flex-col items-center p-6"
            on:submit=move |ev| on_submit.call(ev)
        >
            <h2 class="text-2xl font-bold text-gray-700 mb-6">"Login"</h2>
            <div class="w-full space-y-4">
                <input
                    id="identifier"
                    name="email"
                    type="text"
                    placeholder="Email"
                    aria-label="Email"
                    class="w-full p-3 border border-gray-300 rounded-lg shadow-sm focus:ring-2 focus:ring-blue-500"
                    prop:value=identifier
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        on_identifier_input.call(target.value());
                    }
                />
                <input
                    id="secret"
                    name="password"
                    type="password"
                    placeholder="Password"
                    aria-label="Password"
                    class="w-full p-3 border border-gray-300 rounded-lg shadow-sm focus:ring-2 focus:ring-blue-500"
                    prop:value=secret
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        on_secret_input.call(target.value());
                    }
                />
                <button
                    type="submit"
                    aria-label="Login"
                    disabled=move || pending.get()
                    class="w-full bg-gradient-to-b from-amber-500 to-orange-400 text-white py-3 rounded-lg shadow-lg disabled:opacity-50"
                >
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(pending: bool) -> String {
        render_to_string(move || {
            view! {
                <LoginForm
                    identifier=Signal::derive(|| "a@b.com".to_string())
                    secret=Signal::derive(String::new)
                    pending=Signal::derive(move || pending)
                    on_identifier_input=Callback::new(|_: String| {})
                    on_secret_input=Callback::new(|_: String| {})
                    on_submit=Callback::new(|_: SubmitEvent| {})
                />
            }
        })
    }

    #[test]
    fn renders_both_fields_and_submit() {
        let html = render(false);
        assert!(html.contains("placeholder=\"Email\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("aria-label=\"Login\""));
        assert!(!html.contains("Logging in..."));
    }

    #[test]
    fn pending_switches_button_label() {
        let html = render(true);
        assert!(html.contains("Logging in..."));
    }
}
