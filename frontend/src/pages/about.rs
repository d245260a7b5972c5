use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Us"/>
        <section class="max-w-4xl mx-auto py-12 px-4 space-y-6">
            <h1 class="text-4xl font-bold text-gray-900">"About Us"</h1>
            <p class="text-lg text-gray-600">
                "Code with Swayam brings students, faculty and administrators together around competitions, mentorships, quizzes and daily practice."
            </p>
            <p class="text-gray-600">
                "Students build a track record, faculty run sessions and track progress, and administrators keep the calendar of events running."
            </p>
        </section>
    }
}
