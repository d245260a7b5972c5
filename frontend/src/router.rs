use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::{
        guard::RequireRole,
        layout::{Footer, Header},
        toast::ToastProvider,
    },
    pages::{
        about::AboutPage,
        contact::ContactPage,
        dashboard::{AdminDashboardPage, FacultyDashboardPage, StudentDashboardPage},
        events::EventsPage,
        home::HomePage,
        login::LoginPage,
        not_found::NotFoundPage,
        practice::PracticePage,
    },
    state::{auth::AuthProvider, flash::provide_flash, session::SessionContext},
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/aboutus",
    "/contactus",
    "/events/*any",
    "/practice",
    "/login",
    "/admin-dashboard",
    "/faculty-dashboard",
    "/student-dashboard",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] =
    &["/admin-dashboard", "/faculty-dashboard", "/student-dashboard"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    AdminDashboard,
    FacultyDashboard,
    StudentDashboard,
}

impl Destination {
    pub const fn path(self) -> &'static str {
        match self {
            Destination::AdminDashboard => "/admin-dashboard",
            Destination::FacultyDashboard => "/faculty-dashboard",
            Destination::StudentDashboard => "/student-dashboard",
        }
    }

    pub fn role(self) -> Role {
        match self {
            Destination::AdminDashboard => Role::Admin,
            Destination::FacultyDashboard => Role::Faculty,
            Destination::StudentDashboard => Role::Student,
        }
    }
}

/// Where a freshly authenticated user goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    To(Destination),
    /// Role tag the portal has no dashboard for; the user stays put.
    Stay { role: String },
}

pub fn dispatch(role: &Role) -> Redirect {
    match role {
        Role::Admin => Redirect::To(Destination::AdminDashboard),
        Role::Faculty => Redirect::To(Destination::FacultyDashboard),
        Role::Student => Redirect::To(Destination::StudentDashboard),
        Role::Unknown(raw) => Redirect::Stay { role: raw.clone() },
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(SessionContext::from_environment());
    provide_flash();
    view! {
        <ToastProvider>
            <AuthProvider>
                <Router>
                    <div class="bg-white min-h-screen flex flex-col">
                        <Header/>
                        <main class="flex-1">
                            <Routes>
                                <Route path="/" view=HomePage/>
                                <Route path="/aboutus" view=AboutPage/>
                                <Route path="/contactus" view=ContactPage/>
                                <Route path="/events/*any" view=EventsPage/>
                                <Route path="/practice" view=PracticePage/>
                                <Route path="/login" view=LoginPage/>
                                <Route path="/admin-dashboard" view=ProtectedAdminDashboard/>
                                <Route path="/faculty-dashboard" view=ProtectedFacultyDashboard/>
                                <Route path="/student-dashboard" view=ProtectedStudentDashboard/>
                                <Route path="/*any" view=NotFoundPage/>
                            </Routes>
                        </main>
                        <Footer/>
                    </div>
                </Router>
            </AuthProvider>
        </ToastProvider>
    }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><AdminDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedFacultyDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Faculty><FacultyDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedStudentDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Student><StudentDashboardPage/></RequireRole> }
}
