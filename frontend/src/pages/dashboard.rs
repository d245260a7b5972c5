use crate::{
    api::Role,
    components::toast::use_toasts,
    state::{auth::use_auth, flash::use_flash},
};
use leptos::*;
use leptos_meta::Title;

struct Panel {
    title: &'static str,
    body: &'static str,
}

const ADMIN_PANELS: &[Panel] = &[
    Panel {
        title: "Events",
        body: "Publish competitions, bootcamps and quizzes for the semester.",
    },
    Panel {
        title: "Users",
        body: "Review faculty and student accounts.",
    },
];

const FACULTY_PANELS: &[Panel] = &[
    Panel {
        title: "Mentorship sessions",
        body: "Upcoming one-on-one slots with your students.",
    },
    Panel {
        title: "Quiz results",
        body: "Scores from the quizzes you run.",
    },
];

const STUDENT_PANELS: &[Panel] = &[
    Panel {
        title: "Upcoming events",
        body: "Competitions and bootcamps you can still register for.",
    },
    Panel {
        title: "Practice streak",
        body: "Keep refining your skills daily.",
    },
];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <DashboardShell role=Role::Admin title="Admin Dashboard" panels=ADMIN_PANELS/> }
}

#[component]
pub fn FacultyDashboardPage() -> impl IntoView {
    view! { <DashboardShell role=Role::Faculty title="Faculty Dashboard" panels=FACULTY_PANELS/> }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! { <DashboardShell role=Role::Student title="Student Dashboard" panels=STUDENT_PANELS/> }
}

#[component]
fn DashboardShell(role: Role, title: &'static str, panels: &'static [Panel]) -> impl IntoView {
    // Runs once per mount, so the greeting never comes back on re-render.
    use_toasts().relay_welcome(use_flash());

    let (auth, _) = use_auth();
    let greeting = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .and_then(|user| user.display_name())
                .map(|name| format!("Hello, {}", name))
                .unwrap_or_else(|| "Hello".to_string())
        })
    };

    view! {
        <Title text=title/>
        <section class="max-w-6xl mx-auto py-10 px-4">
            <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
            <p class="mt-2 text-gray-600">
                {greeting}
                <span class="ml-2 inline-block px-2 py-0.5 rounded bg-amber-100 text-amber-800 text-xs font-semibold">
                    {role.to_string()}
                </span>
            </p>
            <div class="mt-8 grid grid-cols-1 md:grid-cols-2 gap-6">
                {panels
                    .iter()
                    .map(|panel| view! {
                        <div class="p-6 rounded-2xl shadow bg-white border border-gray-200">
                            <h2 class="text-xl font-semibold">{panel.title}</h2>
                            <p class="text-gray-600">{panel.body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::toast::{Toasts, WELCOME_MESSAGE};
    use crate::state::flash::{provide_flash, Flash};
    use crate::test_support::helpers::{auth_result, provide_auth};
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn dashboard_greets_the_stored_user() {
        let html = render_to_string(|| {
            provide_auth(Some(auth_result("Student")));
            view! { <StudentDashboardPage/> }
        });
        assert!(html.contains("Student Dashboard"));
        assert!(html.contains("Hello, Student User"));
        assert!(html.contains("Upcoming events"));
    }

    #[test]
    fn welcome_toast_shows_once_across_rerenders() {
        with_runtime(|| {
            provide_auth(Some(auth_result("Student")));
            let toasts = Toasts::new();
            provide_context(toasts);
            let flash = provide_flash();
            flash.set(Flash::Welcome);

            let first = view! { <StudentDashboardPage/> }.into_view().render_to_string();
            let second = view! { <StudentDashboardPage/> }.into_view().render_to_string();

            assert!(first.contains("Student Dashboard"));
            assert!(second.contains("Student Dashboard"));
            let shown = toasts.snapshot();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].message, WELCOME_MESSAGE);
            assert_eq!(flash.peek(), None);
        });
    }

    #[test]
    fn no_toast_without_welcome_flag() {
        with_runtime(|| {
            provide_auth(Some(auth_result("Admin")));
            let toasts = Toasts::new();
            provide_context(toasts);
            provide_flash();

            let _ = view! { <AdminDashboardPage/> }.into_view().render_to_string();
            assert!(toasts.snapshot().is_empty());
        });
    }
}
