//! Step 1 controller: the profile form.
//!
//! The controller is an event reducer over [`ProfileForm`]: every mutation
//! comes in as a [`ProfileEvent`], and the error map is only ever touched
//! through [`ValidationErrors`]. The named methods are thin wrappers the
//! UI layer calls from DOM handlers.

use crate::errors::{ErrorKind, Field, FieldError, StorageError, SubmitError, ValidationErrors};
use crate::rules;
use crate::storage::{Gateway, PROFILE_DATA_KEY};
use crate::types::{Gender, PhotoFile, ProfilePayload, Qualification, UserType};

const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
const MSG_EMAIL_REQUIRED: &str = "Email is required";
const MSG_EMAIL_FORMAT: &str = "Please enter a valid email address";
const MSG_EMAIL_UNVERIFIED: &str = "Please verify your email";
const MSG_PHONE_FORMAT: &str = "Please enter a valid phone number";
const MSG_USER_TYPE_REQUIRED: &str = "User type is required";
const MSG_QUALIFICATION_REQUIRED: &str = "Highest qualification is required";
const MSG_PHOTO_TOO_LARGE: &str = "File size must be less than 5MB";
const MSG_PHOTO_TYPE: &str = "Only PNG and JPG files are allowed";

/// Where a form screen is in its lifecycle. `Validating` only exists for
/// the duration of a `submit` call; `Submitted` is terminal for the
/// screen's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Validating,
    Submitted,
}

/// Free-text inputs of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FullName,
    Email,
    PhoneNumber,
    Country,
    State,
    City,
    FieldOfStudy,
    CurrentOrganization,
}

impl TextField {
    /// The error-map slot cleared when this field is edited. Fields that
    /// have no validation rule have no slot.
    pub fn error_slot(self) -> Option<Field> {
        match self {
            TextField::FullName => Some(Field::FullName),
            TextField::Email => Some(Field::Email),
            TextField::PhoneNumber => Some(Field::PhoneNumber),
            _ => None,
        }
    }
}

/// Everything the profile screen can do to its state.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEvent {
    Edit(TextField, String),
    SetGender(Option<Gender>),
    SetUserType(Option<UserType>),
    SetQualification(Option<Qualification>),
    SelectPhoto(PhotoFile),
    VerifyEmail,
}

/// In-memory state of the step-1 screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: Option<Gender>,
    pub country: String,
    pub state: String,
    pub city: String,
    pub user_type: Option<UserType>,
    pub highest_qualification: Option<Qualification>,
    pub field_of_study: String,
    pub current_organization: String,
    photo: Option<PhotoFile>,
    verified_email: Option<String>,
    errors: ValidationErrors,
    status: FormStatus,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            gender: None,
            country: "India".to_owned(),
            state: String::new(),
            city: String::new(),
            user_type: None,
            highest_qualification: None,
            field_of_study: String::new(),
            current_organization: String::new(),
            photo: None,
            verified_email: None,
            errors: ValidationErrors::new(),
            status: FormStatus::Editing,
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn photo(&self) -> Option<&PhotoFile> {
        self.photo.as_ref()
    }

    /// Current value of a free-text input, for view binding.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Email => &self.email,
            TextField::PhoneNumber => &self.phone_number,
            TextField::Country => &self.country,
            TextField::State => &self.state,
            TextField::City => &self.city,
            TextField::FieldOfStudy => &self.field_of_study,
            TextField::CurrentOrganization => &self.current_organization,
        }
    }

    /// Verification is bound to the value it verified: the form counts as
    /// verified only while the live email equals the recorded one, so any
    /// edit after verifying invalidates it.
    pub fn is_email_verified(&self) -> bool {
        self.verified_email.as_deref() == Some(self.email.as_str())
    }

    /// The reducer. Events after a successful submit are ignored; the
    /// screen is torn down on navigation.
    pub fn apply(&mut self, event: ProfileEvent) {
        if self.status == FormStatus::Submitted {
            return;
        }
        match event {
            ProfileEvent::Edit(field, value) => {
                match field {
                    TextField::FullName => self.full_name = value,
                    TextField::Email => self.email = value,
                    TextField::PhoneNumber => self.phone_number = value,
                    TextField::Country => self.country = value,
                    TextField::State => self.state = value,
                    TextField::City => self.city = value,
                    TextField::FieldOfStudy => self.field_of_study = value,
                    TextField::CurrentOrganization => self.current_organization = value,
                }
                if let Some(slot) = field.error_slot() {
                    self.errors.clear(slot);
                }
            }
            ProfileEvent::SetGender(gender) => {
                self.gender = gender;
            }
            ProfileEvent::SetUserType(user_type) => {
                self.user_type = user_type;
                if self.user_type.is_some() {
                    self.errors.clear(Field::UserType);
                }
            }
            ProfileEvent::SetQualification(qualification) => {
                self.highest_qualification = qualification;
                if self.highest_qualification.is_some() {
                    self.errors.clear(Field::HighestQualification);
                }
            }
            ProfileEvent::SelectPhoto(photo) => {
                match rules::photo_constraints(photo.size, &photo.mime) {
                    Ok(()) => {
                        self.photo = Some(photo);
                        self.errors.clear(Field::ProfilePhoto);
                    }
                    // The prior selection stays active on failure.
                    Err(kind) => self.errors.set(Field::ProfilePhoto, photo_error(kind)),
                }
            }
            ProfileEvent::VerifyEmail => {
                if self.email.is_empty() {
                    self.errors.set(
                        Field::Email,
                        FieldError::new(ErrorKind::MissingField, MSG_EMAIL_REQUIRED),
                    );
                } else if rules::email_format(&self.email).is_err() {
                    self.errors.set(
                        Field::Email,
                        FieldError::new(ErrorKind::InvalidFormat, MSG_EMAIL_FORMAT),
                    );
                } else {
                    // Client-side stub: no message goes out, a well-formed
                    // address verifies immediately.
                    self.verified_email = Some(self.email.clone());
                    self.errors.clear(Field::Email);
                }
            }
        }
    }

    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        self.apply(ProfileEvent::Edit(field, value.into()));
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.apply(ProfileEvent::SetGender(gender));
    }

    pub fn set_user_type(&mut self, user_type: Option<UserType>) {
        self.apply(ProfileEvent::SetUserType(user_type));
    }

    pub fn set_qualification(&mut self, qualification: Option<Qualification>) {
        self.apply(ProfileEvent::SetQualification(qualification));
    }

    /// Returns whether the file became the active selection. On `false`
    /// the caller still owns the preview handle and should revoke it.
    pub fn select_photo(&mut self, photo: PhotoFile) -> bool {
        self.apply(ProfileEvent::SelectPhoto(photo));
        !self.errors.contains(Field::ProfilePhoto)
    }

    pub fn verify_email(&mut self) {
        self.apply(ProfileEvent::VerifyEmail);
    }

    /// Full validation union. Runs every applicable rule; within the email
    /// slot the verification gate is checked last and wins.
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if rules::required_text(&self.full_name).is_err() {
            errors.set(
                Field::FullName,
                FieldError::new(ErrorKind::MissingField, MSG_FULL_NAME_REQUIRED),
            );
        }
        if rules::required_text(&self.email).is_err() {
            errors.set(
                Field::Email,
                FieldError::new(ErrorKind::MissingField, MSG_EMAIL_REQUIRED),
            );
        } else if rules::email_format(&self.email).is_err() {
            errors.set(
                Field::Email,
                FieldError::new(ErrorKind::InvalidFormat, MSG_EMAIL_FORMAT),
            );
        }
        if !self.is_email_verified() {
            errors.set(
                Field::Email,
                FieldError::new(ErrorKind::Unverified, MSG_EMAIL_UNVERIFIED),
            );
        }
        if !self.phone_number.is_empty() && rules::phone_format(&self.phone_number).is_err() {
            errors.set(
                Field::PhoneNumber,
                FieldError::new(ErrorKind::InvalidFormat, MSG_PHONE_FORMAT),
            );
        }
        if rules::required_choice(self.user_type.as_ref()).is_err() {
            errors.set(
                Field::UserType,
                FieldError::new(ErrorKind::MissingField, MSG_USER_TYPE_REQUIRED),
            );
        }
        if rules::required_choice(self.highest_qualification.as_ref()).is_err() {
            errors.set(
                Field::HighestQualification,
                FieldError::new(ErrorKind::MissingField, MSG_QUALIFICATION_REQUIRED),
            );
        }
        errors
    }

    /// Validate, and on success persist the `profileData` blob as one
    /// atomic write. Any validation failure aborts with no side effects.
    pub fn submit(&mut self, gateway: &impl Gateway) -> Result<(), SubmitError> {
        if self.status == FormStatus::Submitted {
            return Ok(());
        }
        self.status = FormStatus::Validating;
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.status = FormStatus::Editing;
            return Err(SubmitError::Invalid);
        }
        let (Some(user_type), Some(highest_qualification)) =
            (self.user_type, self.highest_qualification)
        else {
            self.status = FormStatus::Editing;
            return Err(SubmitError::Invalid);
        };
        let payload = ProfilePayload {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: absent_if_empty(&self.phone_number),
            gender: self.gender,
            country: self.country.clone(),
            state: absent_if_empty(&self.state),
            city: absent_if_empty(&self.city),
            user_type,
            highest_qualification,
            field_of_study: absent_if_empty(&self.field_of_study),
            current_organization: absent_if_empty(&self.current_organization),
            profile_photo_preview: self.photo.as_ref().map(|p| p.preview_url.clone()),
            step: 1,
        };
        let blob = serde_json::to_string(&payload).map_err(|_| {
            self.status = FormStatus::Editing;
            SubmitError::Storage(StorageError::WriteRejected {
                key: PROFILE_DATA_KEY.to_owned(),
                reason: "payload serialization failed".to_owned(),
            })
        })?;
        if let Err(err) = gateway.write(PROFILE_DATA_KEY, &blob) {
            self.status = FormStatus::Editing;
            return Err(err.into());
        }
        self.status = FormStatus::Submitted;
        Ok(())
    }
}

/// Optional fields persist as an explicit absent marker, not as `""`.
fn absent_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn photo_error(kind: ErrorKind) -> FieldError {
    match kind {
        ErrorKind::FileTooLarge => FieldError::new(kind, MSG_PHOTO_TOO_LARGE),
        _ => FieldError::new(ErrorKind::UnsupportedType, MSG_PHOTO_TYPE),
    }
}
