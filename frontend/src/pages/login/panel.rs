use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let identifier_input = Callback::new(move |value: String| form.identifier.set(value));
    let secret_input = Callback::new(move |value: String| form.secret.set(value));

    view! {
        <div class="min-h-[calc(100vh-8rem)] flex items-center justify-center bg-white px-4">
            <div class="w-full max-w-2xl bg-white rounded-2xl shadow-2xl flex flex-col md:flex-row overflow-hidden border border-gray-300">
                <div class="w-full md:w-1/2 flex flex-col items-center justify-center p-6 bg-gradient-to-b from-amber-300 to-orange-300">
                    <h2 class="text-3xl font-bold mb-2 text-gray-900">"Welcome!"</h2>
                    <p class="text-center text-gray-800">
                        "Enter your credentials to access your account"
                    </p>
                </div>
                <LoginForm
                    identifier=form.identifier
                    secret=form.secret
                    pending=vm.pending()
                    on_identifier_input=identifier_input
                    on_secret_input=secret_input
                    on_submit=handle_submit
                />
            </div>
        </div>
    }
}
