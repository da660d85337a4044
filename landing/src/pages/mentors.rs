// Mentors listing route. The listing itself lives downstream; this shell
// greets the user from the record the onboarding flow just persisted.
use crate::storage::LocalStorageGateway;
use leptos::prelude::*;
use onboarding::storage::load_profile;

#[component]
pub fn MentorsPage() -> impl IntoView {
    let first_name = load_profile(&LocalStorageGateway)
        .ok()
        .flatten()
        .and_then(|p| p.full_name.split_whitespace().next().map(str::to_owned));

    view! {
        <main class="mentors">
            <div class="form-shell">
                <h1 class="form-title">
                    {match first_name {
                        Some(name) => format!("You're all set, {name}."),
                        None => "You're all set.".to_owned(),
                    }}
                </h1>
                <p class="form-subtitle">
                    "We are lining up mentors that match your preferences. "
                    "Your shortlist lands here shortly."
                </p>
                <a href="/" class="btn btn-secondary">"Back to home"</a>
            </div>
        </main>
    }
}
