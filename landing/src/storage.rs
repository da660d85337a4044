//! Browser implementation of the persistence gateway over `localStorage`.

use onboarding::{Gateway, StorageError};

/// `localStorage`-backed gateway.
///
/// The storage area is resolved on every call: a sandboxed or disabled
/// area surfaces as [`StorageError::Unavailable`] at the operation that
/// hits it instead of failing at construction time.
pub struct LocalStorageGateway;

impl LocalStorageGateway {
    fn area() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable(
                "localStorage is disabled".to_owned(),
            )),
            Err(_) => Err(StorageError::Unavailable(
                "localStorage is not accessible".to_owned(),
            )),
        }
    }
}

impl Gateway for LocalStorageGateway {
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::area()?
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_owned(),
                reason: err
                    .as_string()
                    .unwrap_or_else(|| "storage write failed".to_owned()),
            })
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::area()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable("localStorage read failed".to_owned()))
    }
}
