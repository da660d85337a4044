// Step 1 of 2: basic profile details.
//
// All form semantics live in `onboarding::ProfileForm`; this page binds
// DOM events to the controller and renders its error map inline.

use crate::storage::LocalStorageGateway;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use onboarding::{
    Field, FormStatus, Gender, PhotoFile, ProfileForm, Qualification, SubmitError, TextField,
    UserType,
};
use wasm_bindgen::JsCast;

#[component]
pub fn CreateProfilePage() -> impl IntoView {
    let form = RwSignal::new(ProfileForm::new());
    let (storage_error, set_storage_error) = signal(None::<&'static str>);
    let navigate = use_navigate();

    let on_photo = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        let Ok(preview_url) = web_sys::Url::create_object_url_with_blob(&file) else {
            return;
        };
        let photo = PhotoFile {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
            preview_url: preview_url.clone(),
        };
        let accepted = form.try_update(|f| f.select_photo(photo)).unwrap_or(false);
        if !accepted {
            // The handle never became the active selection; release it.
            let _ = web_sys::Url::revoke_object_url(&preview_url);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit(&LocalStorageGateway)) {
            Some(Ok(())) => navigate("/profile/preferences", Default::default()),
            Some(Err(SubmitError::Storage(err))) => {
                web_sys::console::error_1(&err.to_string().into());
                set_storage_error.set(Some(
                    "Could not save your profile on this device. Free up storage and try again.",
                ));
            }
            // Validation errors render inline from the error map.
            _ => set_storage_error.set(None),
        }
    };

    view! {
        <main class="onboarding">
            <div class="form-shell">
                <div class="form-progress">
                    <div class="form-progress-labels">
                        <span>"Step 1 of 2"</span>
                        <span>"Basic Details"</span>
                    </div>
                    <div class="form-progress-track">
                        <div class="form-progress-bar half"></div>
                    </div>
                </div>

                <h1 class="form-title">"Create Your Profile"</h1>
                <p class="form-subtitle">"Let's start with your basic information."</p>

                <form class="form" on:submit=on_submit>
                    <ProfileTextInput
                        form=form
                        field=TextField::FullName
                        label="Full Name"
                        placeholder="Enter your full name"
                        required=true
                    />

                    // Profile photo
                    <div class="form-field">
                        <label class="form-label">
                            "Profile Photo " <span class="form-hint">"(optional)"</span>
                        </label>
                        <label class="photo-drop">
                            <input
                                type="file"
                                class="photo-input"
                                accept="image/png,image/jpeg,image/jpg"
                                on:change=on_photo
                            />
                            {move || match form.with(|f| f.photo().map(|p| p.preview_url.clone())) {
                                Some(url) => view! {
                                    <img class="photo-preview" src=url alt="Profile preview"/>
                                }
                                    .into_any(),
                                None => view! {
                                    <div class="photo-placeholder">
                                        <p>"Click to upload"</p>
                                        <p class="form-hint">"PNG or JPG up to 5MB"</p>
                                    </div>
                                }
                                    .into_any(),
                            }}
                        </label>
                        <FieldMessage form=form field=Field::ProfilePhoto />
                    </div>

                    // Email + verification
                    <div class="form-field">
                        <label class="form-label">
                            "Email " <span class="form-required">"*"</span>
                        </label>
                        <div class="form-row">
                            <input
                                type="email"
                                class=move || input_class(form, Some(Field::Email))
                                placeholder="your.email@example.com"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| {
                                    f.update_field(TextField::Email, event_target_value(&ev));
                                })
                            />
                            <button
                                type="button"
                                class=move || {
                                    if form.with(|f| f.is_email_verified()) {
                                        "btn-verify verified"
                                    } else {
                                        "btn-verify"
                                    }
                                }
                                on:click=move |_| form.update(|f| f.verify_email())
                            >
                                {move || {
                                    if form.with(|f| f.is_email_verified()) { "Verified" } else { "Verify" }
                                }}
                            </button>
                        </div>
                        <FieldMessage form=form field=Field::Email />
                    </div>

                    <ProfileTextInput
                        form=form
                        field=TextField::PhoneNumber
                        label="Phone Number"
                        placeholder="+91 1234567890"
                        hint="(optional)"
                        input_type="tel"
                    />

                    // Gender
                    <div class="form-field">
                        <label class="form-label">
                            "Gender " <span class="form-hint">"(optional)"</span>
                        </label>
                        <select
                            class="form-select"
                            prop:value=move || {
                                form.with(|f| f.gender.map(|g| g.value().to_owned()).unwrap_or_default())
                            }
                            on:change=move |ev| form.update(|f| {
                                f.set_gender(Gender::from_value(&event_target_value(&ev)));
                            })
                        >
                            <option value="">"Select gender"</option>
                            {Gender::ALL
                                .iter()
                                .map(|g| view! { <option value=g.value()>{g.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    // Location
                    <div class="form-grid-3">
                        <ProfileTextInput form=form field=TextField::Country label="Country" />
                        <ProfileTextInput
                            form=form
                            field=TextField::State
                            label="State"
                            placeholder="State"
                        />
                        <ProfileTextInput
                            form=form
                            field=TextField::City
                            label="City"
                            placeholder="City"
                        />
                    </div>

                    // User type
                    <div class="form-field">
                        <label class="form-label">
                            "I am a: " <span class="form-required">"*"</span>
                        </label>
                        <select
                            class=move || select_class(form, Field::UserType)
                            prop:value=move || {
                                form.with(|f| f.user_type.map(|t| t.value().to_owned()).unwrap_or_default())
                            }
                            on:change=move |ev| form.update(|f| {
                                f.set_user_type(UserType::from_value(&event_target_value(&ev)));
                            })
                        >
                            <option value="">"Select user type"</option>
                            {UserType::ALL
                                .iter()
                                .map(|t| view! { <option value=t.value()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                        <FieldMessage form=form field=Field::UserType />
                    </div>

                    // Highest qualification
                    <div class="form-field">
                        <label class="form-label">
                            "Highest Qualification " <span class="form-required">"*"</span>
                        </label>
                        <select
                            class=move || select_class(form, Field::HighestQualification)
                            prop:value=move || {
                                form.with(|f| {
                                    f.highest_qualification.map(|q| q.value().to_owned()).unwrap_or_default()
                                })
                            }
                            on:change=move |ev| form.update(|f| {
                                f.set_qualification(Qualification::from_value(&event_target_value(&ev)));
                            })
                        >
                            <option value="">"Select qualification"</option>
                            {Qualification::ALL
                                .iter()
                                .map(|q| view! { <option value=q.value()>{q.label()}</option> })
                                .collect_view()}
                        </select>
                        <FieldMessage form=form field=Field::HighestQualification />
                    </div>

                    <ProfileTextInput
                        form=form
                        field=TextField::FieldOfStudy
                        label="Field of Study / Industry"
                        placeholder="e.g., Computer Science, Marketing"
                    />

                    <ProfileTextInput
                        form=form
                        field=TextField::CurrentOrganization
                        label="Current Organization / Institution"
                        placeholder="Company or University name"
                        hint="(optional)"
                    />

                    {move || storage_error.get().map(|msg| view! {
                        <p class="form-banner-error">{msg}</p>
                    })}

                    <div class="form-actions form-actions-end">
                        <button
                            type="submit"
                            class="btn btn-primary btn-submit"
                            prop:disabled=move || form.with(|f| f.status() == FormStatus::Submitted)
                        >
                            "Next →"
                        </button>
                    </div>
                </form>
            </div>
        </main>
    }
}

fn input_class(form: RwSignal<ProfileForm>, slot: Option<Field>) -> &'static str {
    let invalid = slot.is_some_and(|s| form.with(|f| f.errors().contains(s)));
    if invalid { "form-input invalid" } else { "form-input" }
}

fn select_class(form: RwSignal<ProfileForm>, slot: Field) -> &'static str {
    if form.with(|f| f.errors().contains(slot)) {
        "form-select invalid"
    } else {
        "form-select"
    }
}

/// Inline error line under a control, driven by the controller's map.
#[component]
fn FieldMessage(form: RwSignal<ProfileForm>, field: Field) -> impl IntoView {
    view! {
        {move || form.with(|f| f.errors().message(field)).map(|m| view! {
            <p class="form-error">{m}</p>
        })}
    }
}

/// A plain text input bound to one [`TextField`] of the profile form.
#[component]
fn ProfileTextInput(
    form: RwSignal<ProfileForm>,
    field: TextField,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] hint: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let slot = field.error_slot();
    view! {
        <div class="form-field">
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
                {(!hint.is_empty()).then(|| view! { <span class="form-hint">" "{hint}</span> })}
            </label>
            <input
                type=input_type
                class=move || input_class(form, slot)
                placeholder=placeholder
                prop:value=move || form.with(|f| f.text(field).to_owned())
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
            />
            {slot.map(|s| view! { <FieldMessage form=form field=s /> })}
        </div>
    }
}
