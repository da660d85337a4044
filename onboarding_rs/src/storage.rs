//! The persistence gateway: a synchronous key-value store holding the
//! step payloads as opaque JSON text, plus the read-side contract any
//! downstream page relies on.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::errors::StorageError;
use crate::types::{PreferencesPayload, ProfilePayload};

/// Key for the step-1 blob.
pub const PROFILE_DATA_KEY: &str = "profileData";
/// Key for the step-2 blob.
pub const PREFERENCES_DATA_KEY: &str = "preferencesData";
/// Key for the completion flag.
pub const PROFILE_COMPLETE_KEY: &str = "profileComplete";
/// The literal the completion flag is set to.
pub const PROFILE_COMPLETE_VALUE: &str = "true";

/// Synchronous key-value persistence.
///
/// Each `write` is last-writer-wins and atomic at single-key granularity.
/// `write_many` is the one logical commit the flow needs: ordered writes
/// through one call, stopping at the first failure, so a later entry can
/// never be observed without the earlier ones.
pub trait Gateway {
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.write(key, value)?;
        }
        Ok(())
    }
}

/// In-memory gateway for host-side tests and tooling.
///
/// Records the order of successful writes and can be told to reject a
/// specific key, which is how the quota-exhausted path gets exercised.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    cells: RefCell<BTreeMap<String, String>>,
    writes: RefCell<Vec<String>>,
    reject_key: RefCell<Option<String>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write to `key` fail, simulating quota
    /// exhaustion on that cell.
    pub fn reject_writes_to(&self, key: &str) {
        *self.reject_key.borrow_mut() = Some(key.to_owned());
    }

    /// Direct cell access for assertions.
    pub fn get(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    /// Keys in the order they were successfully written.
    pub fn write_log(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Gateway for MemoryGateway {
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_key.borrow().as_deref() == Some(key) {
            return Err(StorageError::WriteRejected {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        self.cells
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self.writes.borrow_mut().push(key.to_owned());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cells.borrow().get(key).cloned())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(
    gateway: &impl Gateway,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match gateway.read(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|_| StorageError::Corrupted { key: key.to_owned() }),
    }
}

/// Read back the step-1 blob, if present.
pub fn load_profile(gateway: &impl Gateway) -> Result<Option<ProfilePayload>, StorageError> {
    read_json(gateway, PROFILE_DATA_KEY)
}

/// Read back the step-2 blob, if present.
pub fn load_preferences(
    gateway: &impl Gateway,
) -> Result<Option<PreferencesPayload>, StorageError> {
    read_json(gateway, PREFERENCES_DATA_KEY)
}

/// Whether the flow has been completed on this user agent.
pub fn profile_complete(gateway: &impl Gateway) -> Result<bool, StorageError> {
    Ok(gateway.read(PROFILE_COMPLETE_KEY)?.as_deref() == Some(PROFILE_COMPLETE_VALUE))
}

/// The merged view of everything the flow persisted.
///
/// Storage keeps the two step blobs under independent keys; this is the
/// read-side convention that reconciles them for downstream consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingRecord {
    pub profile: Option<ProfilePayload>,
    pub preferences: Option<PreferencesPayload>,
    pub complete: bool,
}

impl OnboardingRecord {
    pub fn load(gateway: &impl Gateway) -> Result<Self, StorageError> {
        Ok(Self {
            profile: load_profile(gateway)?,
            preferences: load_preferences(gateway)?,
            complete: profile_complete(gateway)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_overwrites_and_read_reports_absence() {
        let store = MemoryGateway::new();
        assert_eq!(store.read("k").unwrap(), None);
        store.write("k", "one").unwrap();
        store.write("k", "two").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn write_many_stops_at_first_failure() {
        let store = MemoryGateway::new();
        store.reject_writes_to("b");
        let err = store
            .write_many(&[("a", "1"), ("b", "2"), ("c", "3")])
            .unwrap_err();
        assert!(matches!(err, StorageError::WriteRejected { ref key, .. } if key == "b"));
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("b"), None);
        assert_eq!(store.get("c"), None);
        assert_eq!(store.write_log(), vec!["a".to_owned()]);
    }

    #[test]
    fn profile_complete_requires_the_exact_literal() {
        let store = MemoryGateway::new();
        assert!(!profile_complete(&store).unwrap());
        store.write(PROFILE_COMPLETE_KEY, "yes").unwrap();
        assert!(!profile_complete(&store).unwrap());
        store.write(PROFILE_COMPLETE_KEY, PROFILE_COMPLETE_VALUE).unwrap();
        assert!(profile_complete(&store).unwrap());
    }

    #[test]
    fn corrupted_blob_surfaces_the_key() {
        let store = MemoryGateway::new();
        store.write(PROFILE_DATA_KEY, "{not json").unwrap();
        let err = load_profile(&store).unwrap_err();
        assert_eq!(
            err,
            StorageError::Corrupted { key: PROFILE_DATA_KEY.to_owned() }
        );
    }

    #[test]
    fn empty_store_loads_an_empty_record() {
        let store = MemoryGateway::new();
        let record = OnboardingRecord::load(&store).unwrap();
        assert_eq!(record.profile, None);
        assert_eq!(record.preferences, None);
        assert!(!record.complete);
    }
}
