use crate::{
    components::toast::use_toasts,
    router::{self, Redirect, LOGIN_PATH},
    state::{
        auth::{self, use_auth},
        session::use_session,
    },
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/events/all", "Events"),
    ("/practice", "Practice"),
    ("/aboutus", "About Us"),
    ("/contactus", "Contact Us"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = create_signal(false);

    let dashboard_path = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .and_then(|user| match router::dispatch(&user.role) {
                    Redirect::To(destination) => Some(destination.path()),
                    Redirect::Stay { .. } => None,
                })
        })
    };
    let is_authenticated = move || auth.with(|state| state.is_authenticated);

    let on_logout = Callback::new(move |_: ev::MouseEvent| {
        set_menu_open.set(false);
        auth::logout(&session, set_auth);
        toasts.info("You have been logged out.");
        navigate(LOGIN_PATH, NavigateOptions::default());
    });
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-bold text-gray-900">
                        "Code with " <span class="text-amber-600">"Swayam"</span>
                    </a>
                    <nav class="hidden md:flex items-center space-x-4">
                        <NavLinks on_click=Callback::new(|_| ())/>
                        <Show
                            when=is_authenticated
                            fallback=|| view! {
                                <a href="/login" class="px-4 py-2 rounded-lg bg-amber-500 text-white text-sm font-medium">
                                    "Login"
                                </a>
                            }
                        >
                            {move || dashboard_path().map(|path| view! {
                                <a href=path class="text-gray-600 hover:text-gray-900 px-3 py-2 text-sm font-medium">
                                    "Dashboard"
                                </a>
                            })}
                            <button
                                on:click=move |ev| on_logout.call(ev)
                                class="px-4 py-2 rounded-lg border border-gray-300 text-sm font-medium hover:bg-gray-50"
                            >
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                    <button
                        type="button"
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-600 hover:text-gray-900"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        "☰"
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="md:hidden border-t border-gray-200 px-2 py-3 flex flex-col space-y-1">
                        <NavLinks on_click=Callback::new(move |_| set_menu_open.set(false))/>
                        <Show
                            when=is_authenticated
                            fallback=|| view! { <a href="/login" class="px-3 py-2 text-sm font-medium">"Login"</a> }
                        >
                            <button on:click=move |ev| on_logout.call(ev) class="text-left px-3 py-2 text-sm font-medium">
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn NavLinks(on_click: Callback<()>) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|(href, label)| {
            view! {
                <a
                    href=*href
                    class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium"
                    on:click=move |_| on_click.call(())
                >
                    {*label}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="max-w-7xl mx-auto px-4 py-8 flex flex-col md:flex-row justify-between gap-4 text-sm">
                <p>"Code with Swayam. Learn, compete and get hired."</p>
                <nav class="flex space-x-4">
                    <a href="/aboutus" class="hover:text-white">"About Us"</a>
                    <a href="/contactus" class="hover:text-white">"Contact Us"</a>
                </nav>
            </div>
        </footer>
    }
}
