// Step 2 of 2: mentorship preferences.

use crate::storage::LocalStorageGateway;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use onboarding::{
    Field, FormStatus, MentorshipArea, MentorshipMode, PreferencesForm, SubmitError,
};

#[component]
pub fn PreferencesPage() -> impl IntoView {
    let form = RwSignal::new(PreferencesForm::new());
    let (storage_error, set_storage_error) = signal(None::<&'static str>);
    let navigate = use_navigate();

    let on_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit(&LocalStorageGateway)) {
            Some(Ok(())) => navigate("/mentors", Default::default()),
            Some(Err(SubmitError::Storage(err))) => {
                web_sys::console::error_1(&err.to_string().into());
                set_storage_error.set(Some(
                    "Could not save your preferences on this device. Free up storage and try again.",
                ));
            }
            _ => set_storage_error.set(None),
        }
    };

    view! {
        <main class="onboarding">
            <div class="form-shell">
                <div class="form-progress">
                    <div class="form-progress-labels">
                        <span>"Step 2 of 2"</span>
                        <span>"Preferences"</span>
                    </div>
                    <div class="form-progress-track">
                        <div class="form-progress-bar full"></div>
                    </div>
                </div>

                <h1 class="form-title">"Your Mentorship Preferences"</h1>
                <p class="form-subtitle">"Help us match you with the right mentors."</p>

                <form class="form" on:submit=on_submit>
                    // Mentorship areas
                    <div class="form-field">
                        <label class="form-label">
                            "I am looking for mentorship in: " <span class="form-required">"*"</span>
                        </label>
                        <div class="choice-grid">
                            {MentorshipArea::ALL
                                .iter()
                                .copied()
                                .map(|area| view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if form.with(|f| f.is_area_selected(area)) {
                                                "choice-chip selected"
                                            } else {
                                                "choice-chip"
                                            }
                                        }
                                        on:click=move |_| form.update(|f| f.toggle_area(area))
                                    >
                                        {area.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                        {move || form.with(|f| f.errors().message(Field::Areas)).map(|m| view! {
                            <p class="form-error">{m}</p>
                        })}
                    </div>

                    // Preferred modes
                    <div class="form-field">
                        <label class="form-label">
                            "Preferred Mentorship Mode: " <span class="form-required">"*"</span>
                        </label>
                        <div class="choice-grid">
                            {MentorshipMode::ALL
                                .iter()
                                .copied()
                                .map(|mode| view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if form.with(|f| f.is_mode_selected(mode)) {
                                                "choice-chip selected"
                                            } else {
                                                "choice-chip"
                                            }
                                        }
                                        on:click=move |_| form.update(|f| f.toggle_mode(mode))
                                    >
                                        {mode.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                        {move || form.with(|f| f.errors().message(Field::Modes)).map(|m| view! {
                            <p class="form-error">{m}</p>
                        })}
                    </div>

                    // Goals
                    <div class="form-field">
                        <label class="form-label">
                            "What do you want to achieve through mentorship?"
                        </label>
                        <textarea
                            class="form-textarea"
                            rows="5"
                            placeholder="Share your goals, aspirations, and what you hope to learn..."
                            prop:value=move || form.with(|f| f.goals.clone())
                            on:input=move |ev| form.update(|f| f.update_goals(event_target_value(&ev)))
                        ></textarea>
                    </div>

                    {move || storage_error.get().map(|msg| view! {
                        <p class="form-banner-error">{msg}</p>
                    })}

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=on_back>
                            "← Back"
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary btn-submit"
                            prop:disabled=move || form.with(|f| f.status() == FormStatus::Submitted)
                        >
                            "Create Profile →"
                        </button>
                    </div>
                </form>
            </div>
        </main>
    }
}
