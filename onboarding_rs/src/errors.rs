//! Validation and persistence error types, plus the per-screen error map.

use std::collections::BTreeMap;

use thiserror::Error;

/// What went wrong with a single field. Every kind is a recoverable,
/// user-correctable input error; none aborts the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("required field is missing")]
    MissingField,
    #[error("value does not match the expected format")]
    InvalidFormat,
    #[error("value has not been verified")]
    Unverified,
    #[error("at least one option must be selected")]
    MissingSelection,
    #[error("file exceeds the size limit")]
    FileTooLarge,
    #[error("file type is not supported")]
    UnsupportedType,
}

/// Form controls that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FullName,
    ProfilePhoto,
    Email,
    PhoneNumber,
    UserType,
    HighestQualification,
    Areas,
    Modes,
}

/// A failed rule: the kind for programmatic checks, the message for the
/// inline rendering next to the offending control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

/// The authoritative field -> message map for one screen.
///
/// One message per field; a later rule for the same field overwrites an
/// earlier one. Absence of a field means "no error". All mutation of the
/// map goes through here, so the on-edit clearing path and the on-submit
/// recompute cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    map: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        self.map.insert(field, error);
    }

    /// Record the outcome of one rule; `Ok` leaves the map untouched.
    pub fn record(&mut self, field: Field, outcome: Result<(), FieldError>) {
        if let Err(error) = outcome {
            self.set(field, error);
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.map.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.map.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.map.get(&field).map(|e| e.message)
    }

    pub fn kind(&self, field: Field) -> Option<ErrorKind> {
        self.map.get(&field).map(|e| e.kind)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.map.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Persistence gateway failure. The store is browser-local, so the only
/// real-world causes are a disabled storage area or an exhausted quota.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage area is unavailable: {0}")]
    Unavailable(String),
    #[error("write to {key:?} was rejected: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("stored value under {key:?} is not valid JSON")]
    Corrupted { key: String },
}

/// Why a submit did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Validation failed; the controller's [`ValidationErrors`] holds the
    /// per-field messages.
    #[error("form has validation errors")]
    Invalid,
    /// The payload could not be persisted. No navigation should happen.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
