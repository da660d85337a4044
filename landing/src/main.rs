// InnovKaro Landing & Onboarding — Leptos 0.8 Edition

mod pages;
mod sections;
mod storage;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{CreateProfilePage, HomePage, MentorsPage, PreferencesPage};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/profile/create") view=CreateProfilePage/>
                <Route path=path!("/profile/preferences") view=PreferencesPage/>
                <Route path=path!("/mentors") view=MentorsPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="notfound">
            <h1 class="notfound-title">"404"</h1>
            <p class="notfound-text">"This page does not exist."</p>
            <a href="/" class="btn btn-primary">"Back home"</a>
        </main>
    }
}
