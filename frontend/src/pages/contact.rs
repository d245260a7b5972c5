use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact Us"/>
        <section class="max-w-4xl mx-auto py-12 px-4 space-y-4">
            <h1 class="text-4xl font-bold text-gray-900">"Contact Us"</h1>
            <p class="text-gray-600">"Questions about events or your account? Reach the coordinators:"</p>
            <ul class="text-gray-700 space-y-1">
                <li>"Email: "<a class="text-blue-600" href="mailto:support@codewithswayam.in">"support@codewithswayam.in"</a></li>
                <li>"Office hours: Monday to Friday, 10:00 to 17:00"</li>
            </ul>
        </section>
    }
}
