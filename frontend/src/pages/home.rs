use leptos::*;
use leptos_meta::Title;

pub struct Category {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub href: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        title: "Competitions",
        description: "Gain Practical Experience",
        icon: "💻",
        color: "bg-green-300",
        href: "/events/competitions",
    },
    Category {
        title: "Mentorships",
        description: "Guidance From Top Mentors",
        icon: "🎓",
        color: "bg-orange-300",
        href: "/events/mentorships",
    },
    Category {
        title: "Quizzes",
        description: "Explore Diverse Careers",
        icon: "📂",
        color: "bg-blue-300",
        href: "/events/quizzes",
    },
    Category {
        title: "Practice",
        description: "Refine Skills Daily",
        icon: "⌨️",
        color: "bg-purple-300",
        href: "/practice",
    },
    Category {
        title: "BootCamps",
        description: "Battle For Excellence",
        icon: "🏆",
        color: "bg-yellow-300",
        href: "/events/bootcamps",
    },
    Category {
        title: "More",
        description: "Explore More Opportunities",
        icon: "🚀",
        color: "bg-pink-300",
        href: "/events/all",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Code with Swayam"/>
        <div class="p-8 min-h-screen bg-gray-100 flex flex-col md:flex-row items-center">
            <div class="md:w-1/2 text-left">
                <h1 class="text-5xl font-bold text-gray-900 mb-6">
                    "Code with" <span class="text-amber-600">" Swayam !"</span>
                </h1>
                <p class="text-lg text-gray-600 mb-8">
                    "Explore opportunities to grow, showcase skills, gain points & get hired by your dream company."
                </p>
                <div class="p-4 flex flex-col items-start">
                    <h2 class="text-xl font-semibold">"Get the best recommendations!"</h2>
                    <p class="text-gray-600">
                        "Share your background and career goals for personalized recommendations."
                    </p>
                    <a href="/login" class="mt-4 px-6 py-2 bg-blue-600 text-white font-bold rounded-lg shadow-md hover:bg-blue-700 transition">
                        "Complete my profile"
                    </a>
                </div>
            </div>
            <div class="md:w-1/2 grid grid-cols-1 md:grid-cols-2 gap-6 mt-10 md:mt-0">
                {CATEGORIES
                    .iter()
                    .map(|item| view! {
                        <a
                            href=item.href
                            class=format!("{} p-6 rounded-2xl shadow-lg flex items-center justify-between transition-all", item.color)
                        >
                            <div class="text-3xl text-gray-900">{item.icon}</div>
                            <div class="text-right">
                                <h3 class="text-xl font-semibold">{item.title}</h3>
                                <p class="text-gray-700">{item.description}</p>
                            </div>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_every_category_card() {
        let html = render_to_string(|| view! { <HomePage/> });
        for category in CATEGORIES {
            assert!(html.contains(category.title));
            assert!(html.contains(category.description));
        }
    }
}
