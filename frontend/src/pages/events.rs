use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSection {
    All,
    Competitions,
    Mentorships,
    Quizzes,
    BootCamps,
}

impl EventSection {
    pub const LISTED: [EventSection; 4] = [
        EventSection::Competitions,
        EventSection::Mentorships,
        EventSection::Quizzes,
        EventSection::BootCamps,
    ];

    /// Resolves the tail of `/events/*any`; unknown tails show every section.
    pub fn from_path(tail: &str) -> Self {
        let slug = tail.trim_matches('/').split('/').next().unwrap_or_default();
        match slug.to_ascii_lowercase().as_str() {
            "competitions" => EventSection::Competitions,
            "mentorships" => EventSection::Mentorships,
            "quizzes" => EventSection::Quizzes,
            "bootcamps" => EventSection::BootCamps,
            _ => EventSection::All,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            EventSection::All => "all",
            EventSection::Competitions => "competitions",
            EventSection::Mentorships => "mentorships",
            EventSection::Quizzes => "quizzes",
            EventSection::BootCamps => "bootcamps",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EventSection::All => "All Events",
            EventSection::Competitions => "Competitions",
            EventSection::Mentorships => "Mentorships",
            EventSection::Quizzes => "Quizzes",
            EventSection::BootCamps => "BootCamps",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            EventSection::All => "Everything happening on campus, in one place.",
            EventSection::Competitions => "Hackathons and coding contests to gain practical experience.",
            EventSection::Mentorships => "One-on-one guidance from faculty and industry mentors.",
            EventSection::Quizzes => "Short quizzes to explore diverse careers.",
            EventSection::BootCamps => "Intensive multi-day tracks that end in a showdown.",
        }
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let params = use_params_map();
    let section = move || {
        params.with(|p| EventSection::from_path(p.get("any").map(String::as_str).unwrap_or_default()))
    };
    view! {
        <Title text="Events"/>
        <section class="max-w-5xl mx-auto py-12 px-4">
            <nav class="flex flex-wrap gap-2 mb-8">
                {std::iter::once(EventSection::All)
                    .chain(EventSection::LISTED)
                    .map(|s| view! {
                        <a
                            href=format!("/events/{}", s.slug())
                            class=move || {
                                if section() == s {
                                    "px-4 py-2 rounded-full bg-amber-500 text-white text-sm"
                                } else {
                                    "px-4 py-2 rounded-full bg-gray-100 text-gray-700 text-sm"
                                }
                            }
                        >
                            {s.title()}
                        </a>
                    })
                    .collect_view()}
            </nav>
            {move || view! { <EventSectionView section=section()/> }}
        </section>
    }
}

#[component]
pub fn EventSectionView(section: EventSection) -> impl IntoView {
    let shown: Vec<EventSection> = match section {
        EventSection::All => EventSection::LISTED.to_vec(),
        single => vec![single],
    };
    view! {
        <h1 class="text-4xl font-bold text-gray-900 mb-6">{section.title()}</h1>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {shown
                .into_iter()
                .map(|s| view! {
                    <div class="p-6 rounded-2xl shadow bg-white border border-gray-200">
                        <h2 class="text-xl font-semibold">{s.title()}</h2>
                        <p class="text-gray-600">{s.blurb()}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
