//! Option catalogs and the persisted wire payloads.
//!
//! The serde strings here are a contract with whatever reads the stored
//! blobs downstream; they must not drift. The closed option sets
//! (`Gender`, `UserType`, ...) expose `ALL` tables for rendering and
//! `value`/`from_value` for round-tripping through DOM controls.

use serde::{Deserialize, Serialize};

/// Self-reported gender, optional on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    /// Wire string, identical to the serde representation.
    pub const fn value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    /// Human label for `<option>` text.
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

/// Who the user is signing up as. Required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    Student,
    Professional,
    Entrepreneur,
    Mentor,
    Other,
}

impl UserType {
    pub const ALL: [UserType; 5] = [
        UserType::Student,
        UserType::Professional,
        UserType::Entrepreneur,
        UserType::Mentor,
        UserType::Other,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Professional => "professional",
            UserType::Entrepreneur => "entrepreneur",
            UserType::Mentor => "mentor",
            UserType::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Professional => "Professional",
            UserType::Entrepreneur => "Entrepreneur",
            UserType::Mentor => "Mentor",
            UserType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// Highest completed qualification. Required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Qualification {
    HighSchool,
    Diploma,
    Bachelor,
    Master,
    Phd,
    Other,
}

impl Qualification {
    pub const ALL: [Qualification; 6] = [
        Qualification::HighSchool,
        Qualification::Diploma,
        Qualification::Bachelor,
        Qualification::Master,
        Qualification::Phd,
        Qualification::Other,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            Qualification::HighSchool => "high-school",
            Qualification::Diploma => "diploma",
            Qualification::Bachelor => "bachelor",
            Qualification::Master => "master",
            Qualification::Phd => "phd",
            Qualification::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Qualification::HighSchool => "High School",
            Qualification::Diploma => "Diploma",
            Qualification::Bachelor => "Bachelor's Degree",
            Qualification::Master => "Master's Degree",
            Qualification::Phd => "PhD",
            Qualification::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.value() == value)
    }
}

/// What the user wants mentorship in. The display label doubles as the
/// wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MentorshipArea {
    #[serde(rename = "Career Guidance")]
    CareerGuidance,
    #[serde(rename = "Skill Development")]
    SkillDevelopment,
    #[serde(rename = "College Admissions")]
    CollegeAdmissions,
    #[serde(rename = "Job Interview Preparation")]
    JobInterviewPreparation,
    #[serde(rename = "Entrepreneurship & Startup")]
    EntrepreneurshipStartup,
    #[serde(rename = "Technology Specialization (AI, Web Dev, etc.)")]
    TechnologySpecialization,
    #[serde(rename = "Personal Growth / Leadership")]
    PersonalGrowthLeadership,
    #[serde(rename = "Networking Support")]
    NetworkingSupport,
}

impl MentorshipArea {
    pub const ALL: [MentorshipArea; 8] = [
        MentorshipArea::CareerGuidance,
        MentorshipArea::SkillDevelopment,
        MentorshipArea::CollegeAdmissions,
        MentorshipArea::JobInterviewPreparation,
        MentorshipArea::EntrepreneurshipStartup,
        MentorshipArea::TechnologySpecialization,
        MentorshipArea::PersonalGrowthLeadership,
        MentorshipArea::NetworkingSupport,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MentorshipArea::CareerGuidance => "Career Guidance",
            MentorshipArea::SkillDevelopment => "Skill Development",
            MentorshipArea::CollegeAdmissions => "College Admissions",
            MentorshipArea::JobInterviewPreparation => "Job Interview Preparation",
            MentorshipArea::EntrepreneurshipStartup => "Entrepreneurship & Startup",
            MentorshipArea::TechnologySpecialization => {
                "Technology Specialization (AI, Web Dev, etc.)"
            }
            MentorshipArea::PersonalGrowthLeadership => "Personal Growth / Leadership",
            MentorshipArea::NetworkingSupport => "Networking Support",
        }
    }
}

/// How the user wants mentorship delivered. Label doubles as the wire
/// string, as with [`MentorshipArea`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MentorshipMode {
    #[serde(rename = "Chat")]
    Chat,
    #[serde(rename = "Video Sessions")]
    VideoSessions,
    #[serde(rename = "Group Sessions")]
    GroupSessions,
    #[serde(rename = "In-person (if location matches)")]
    InPerson,
}

impl MentorshipMode {
    pub const ALL: [MentorshipMode; 4] = [
        MentorshipMode::Chat,
        MentorshipMode::VideoSessions,
        MentorshipMode::GroupSessions,
        MentorshipMode::InPerson,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MentorshipMode::Chat => "Chat",
            MentorshipMode::VideoSessions => "Video Sessions",
            MentorshipMode::GroupSessions => "Group Sessions",
            MentorshipMode::InPerson => "In-person (if location matches)",
        }
    }
}

/// A profile photo the user picked: file metadata plus the local preview
/// handle minted by the host (an object URL in the browser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub preview_url: String,
}

/// The `profileData` blob, exactly as any downstream reader sees it.
///
/// Optional fields are serialized as explicit `null`, never omitted, and
/// the field order is part of the stored shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub gender: Option<Gender>,
    pub country: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub user_type: UserType,
    pub highest_qualification: Qualification,
    pub field_of_study: Option<String>,
    pub current_organization: Option<String>,
    pub profile_photo_preview: Option<String>,
    pub step: u8,
}

/// The `preferencesData` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPayload {
    pub mentorship_areas: Vec<MentorshipArea>,
    pub preferred_modes: Vec<MentorshipMode>,
    pub goals: Option<String>,
    pub step: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kebab_case_wire_strings_match_value() {
        for g in Gender::ALL {
            assert_eq!(serde_json::to_value(g).unwrap(), g.value());
        }
        for t in UserType::ALL {
            assert_eq!(serde_json::to_value(t).unwrap(), t.value());
        }
        for q in Qualification::ALL {
            assert_eq!(serde_json::to_value(q).unwrap(), q.value());
        }
    }

    #[test]
    fn area_and_mode_serialize_to_their_labels() {
        for a in MentorshipArea::ALL {
            assert_eq!(serde_json::to_value(a).unwrap(), a.label());
        }
        for m in MentorshipMode::ALL {
            assert_eq!(serde_json::to_value(m).unwrap(), m.label());
        }
    }

    #[test]
    fn from_value_round_trips_every_option() {
        for g in Gender::ALL {
            assert_eq!(Gender::from_value(g.value()), Some(g));
        }
        for t in UserType::ALL {
            assert_eq!(UserType::from_value(t.value()), Some(t));
        }
        for q in Qualification::ALL {
            assert_eq!(Qualification::from_value(q.value()), Some(q));
        }
        assert_eq!(Gender::from_value("unknown"), None);
    }

    #[test]
    fn profile_payload_keeps_explicit_nulls_and_field_order() {
        let payload = ProfilePayload {
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone_number: None,
            gender: None,
            country: "India".into(),
            state: None,
            city: None,
            user_type: UserType::Student,
            highest_qualification: Qualification::Bachelor,
            field_of_study: None,
            current_organization: None,
            profile_photo_preview: None,
            step: 1,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"fullName":"Jane Doe","email":"jane@x.com","phoneNumber":null,"gender":null,"country":"India","state":null,"city":null,"userType":"student","highestQualification":"bachelor","fieldOfStudy":null,"currentOrganization":null,"profilePhotoPreview":null,"step":1}"#
        );
    }
}
