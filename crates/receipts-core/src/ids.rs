use rand::{rngs::OsRng, TryRngCore};
use uuid::{Builder, Uuid};

use crate::CoreError;

/// Generate a random version-4 receipt ID straight from the OS entropy source.
///
/// Unlike [`Uuid::new_v4`], an unavailable entropy source is reported instead
/// of panicking, so the caller can fail the one request.
///
/// # Errors
///
/// Returns [`CoreError::Entropy`] if the OS random source fails.
pub fn new_receipt_id() -> Result<Uuid, CoreError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CoreError::Entropy(e.to_string()))?;
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}
