use leptos::*;
use leptos_meta::Title;

const TRACKS: &[(&str, &str)] = &[
    ("Data Structures", "Arrays, trees, graphs and the problems built on them."),
    ("Algorithms", "Sorting, searching, dynamic programming and greedy techniques."),
    ("Aptitude", "Quantitative and logical reasoning drills."),
];

#[component]
pub fn PracticePage() -> impl IntoView {
    view! {
        <Title text="Practice"/>
        <section class="max-w-5xl mx-auto py-12 px-4">
            <h1 class="text-4xl font-bold text-gray-900 mb-6">"Practice"</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {TRACKS
                    .iter()
                    .map(|(title, blurb)| view! {
                        <div class="p-6 rounded-2xl shadow bg-purple-100">
                            <h2 class="text-xl font-semibold">{*title}</h2>
                            <p class="text-gray-700">{*blurb}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
