//! # innovkaro-onboarding
//!
//! The engine behind InnovKaro's two-step profile onboarding flow.
//!
//! This crate holds everything about the flow that is not markup: field
//! validators, per-screen form state, the two step controllers, and the
//! key-value persistence gateway the steps hand their payloads to. It is
//! deliberately DOM-free so the whole flow runs under plain `cargo test`
//! on the host target; the `innovkaro-landing` crate wires it to Leptos
//! and browser `localStorage`.
//!
//! ## Flow
//!
//! ```text
//! ProfileForm::submit    -> writes "profileData"        -> preferences screen
//! PreferencesForm::submit -> writes "preferencesData"
//!                            + "profileComplete"        -> mentors listing
//! ```
//!
//! Each submit is all-or-nothing: validation failures abort before any
//! write, so the gateway never holds a partially-valid record for a step.
//!
//! ## Example
//!
//! ```rust
//! use onboarding::{MemoryGateway, PreferencesForm, MentorshipArea, MentorshipMode};
//!
//! let store = MemoryGateway::new();
//! let mut form = PreferencesForm::new();
//! form.toggle_area(MentorshipArea::CareerGuidance);
//! form.toggle_mode(MentorshipMode::Chat);
//! form.submit(&store).unwrap();
//! assert_eq!(store.get("profileComplete").as_deref(), Some("true"));
//! ```

pub mod errors;
pub mod preferences;
pub mod profile;
pub mod rules;
pub mod storage;
pub mod types;

pub use errors::{ErrorKind, Field, FieldError, StorageError, SubmitError, ValidationErrors};
pub use preferences::{PreferencesEvent, PreferencesForm};
pub use profile::{FormStatus, ProfileEvent, ProfileForm, TextField};
pub use storage::{
    Gateway, MemoryGateway, OnboardingRecord, PREFERENCES_DATA_KEY, PROFILE_COMPLETE_KEY,
    PROFILE_COMPLETE_VALUE, PROFILE_DATA_KEY,
};
pub use types::{
    Gender, MentorshipArea, MentorshipMode, PhotoFile, PreferencesPayload, ProfilePayload,
    Qualification, UserType,
};
