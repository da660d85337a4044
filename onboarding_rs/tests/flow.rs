//! End-to-end run of the two-step flow against the in-memory gateway,
//! pinning the stored wire contract bit-exactly.

use onboarding::{
    MemoryGateway, MentorshipArea, MentorshipMode, OnboardingRecord, PreferencesForm, ProfileForm,
    Qualification, TextField, UserType, PREFERENCES_DATA_KEY, PROFILE_COMPLETE_KEY,
    PROFILE_DATA_KEY,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn raw(store: &MemoryGateway, key: &str) -> serde_json::Value {
    let text = store.get(key).unwrap_or_else(|| panic!("missing key {key:?}"));
    serde_json::from_str(&text).unwrap_or_else(|_| panic!("non-JSON value under {key:?}"))
}

#[test]
fn minimal_happy_path_produces_the_exact_stored_record() {
    let store = MemoryGateway::new();

    // Step 1: only the required fields, everything optional left empty.
    let mut profile = ProfileForm::new();
    profile.update_field(TextField::FullName, "Jane Doe");
    profile.update_field(TextField::Email, "jane@x.com");
    profile.verify_email();
    profile.set_user_type(Some(UserType::Student));
    profile.set_qualification(Some(Qualification::Bachelor));
    profile.submit(&store).expect("step 1 should submit");

    assert_eq!(
        raw(&store, PROFILE_DATA_KEY),
        json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phoneNumber": null,
            "gender": null,
            "country": "India",
            "state": null,
            "city": null,
            "userType": "student",
            "highestQualification": "bachelor",
            "fieldOfStudy": null,
            "currentOrganization": null,
            "profilePhotoPreview": null,
            "step": 1,
        })
    );

    // Step 2: one area, one mode, no goals.
    let mut preferences = PreferencesForm::new();
    preferences.toggle_area(MentorshipArea::CareerGuidance);
    preferences.toggle_mode(MentorshipMode::Chat);
    preferences.submit(&store).expect("step 2 should submit");

    assert_eq!(
        raw(&store, PREFERENCES_DATA_KEY),
        json!({
            "mentorshipAreas": ["Career Guidance"],
            "preferredModes": ["Chat"],
            "goals": null,
            "step": 2,
        })
    );
    assert_eq!(store.get(PROFILE_COMPLETE_KEY).as_deref(), Some("true"));

    // Keys landed in flow order, flag last.
    assert_eq!(
        store.write_log(),
        vec![
            PROFILE_DATA_KEY.to_owned(),
            PREFERENCES_DATA_KEY.to_owned(),
            PROFILE_COMPLETE_KEY.to_owned(),
        ]
    );
}

#[test]
fn filled_out_flow_round_trips_through_the_read_side() {
    let store = MemoryGateway::new();

    let mut profile = ProfileForm::new();
    profile.update_field(TextField::FullName, "Arjun Mehta");
    profile.update_field(TextField::Email, "arjun@mehta.in");
    profile.verify_email();
    profile.update_field(TextField::PhoneNumber, "+91 98450 12345");
    profile.set_gender(Some(onboarding::Gender::Male));
    profile.update_field(TextField::State, "Telangana");
    profile.update_field(TextField::City, "Hyderabad");
    profile.set_user_type(Some(UserType::Professional));
    profile.set_qualification(Some(Qualification::Master));
    profile.update_field(TextField::FieldOfStudy, "Computer Science");
    profile.update_field(TextField::CurrentOrganization, "Acme Systems");
    profile.submit(&store).expect("step 1 should submit");

    let mut preferences = PreferencesForm::new();
    preferences.toggle_area(MentorshipArea::TechnologySpecialization);
    preferences.toggle_area(MentorshipArea::PersonalGrowthLeadership);
    preferences.toggle_mode(MentorshipMode::VideoSessions);
    preferences.update_goals("Move into a staff engineering role.");
    preferences.submit(&store).expect("step 2 should submit");

    let record = OnboardingRecord::load(&store).expect("record should load");
    assert!(record.complete);

    let profile_data = record.profile.expect("profile blob present");
    assert_eq!(profile_data.full_name, "Arjun Mehta");
    assert_eq!(profile_data.phone_number.as_deref(), Some("+91 98450 12345"));
    assert_eq!(profile_data.country, "India");
    assert_eq!(profile_data.city.as_deref(), Some("Hyderabad"));
    assert_eq!(profile_data.step, 1);

    let preferences_data = record.preferences.expect("preferences blob present");
    assert_eq!(
        preferences_data.mentorship_areas,
        vec![
            MentorshipArea::TechnologySpecialization,
            MentorshipArea::PersonalGrowthLeadership,
        ]
    );
    assert_eq!(preferences_data.goals.as_deref(), Some("Move into a staff engineering role."));
    assert_eq!(preferences_data.step, 2);
}

#[test]
fn resubmitting_a_step_overwrites_the_previous_blob() {
    let store = MemoryGateway::new();

    let mut first = PreferencesForm::new();
    first.toggle_area(MentorshipArea::CollegeAdmissions);
    first.toggle_mode(MentorshipMode::Chat);
    first.submit(&store).expect("first submit");

    // A fresh screen instance later in the same browser session.
    let mut second = PreferencesForm::new();
    second.toggle_area(MentorshipArea::NetworkingSupport);
    second.toggle_mode(MentorshipMode::InPerson);
    second.submit(&store).expect("second submit");

    assert_eq!(
        raw(&store, PREFERENCES_DATA_KEY),
        json!({
            "mentorshipAreas": ["Networking Support"],
            "preferredModes": ["In-person (if location matches)"],
            "goals": null,
            "step": 2,
        })
    );
}
