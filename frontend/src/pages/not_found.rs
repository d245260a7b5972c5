use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="max-w-xl mx-auto py-24 px-4 text-center">
            <h1 class="text-4xl font-bold text-gray-900">"Page not found"</h1>
            <a href="/" class="mt-6 inline-block text-blue-600">"Back to home"</a>
        </section>
    }
}
