use super::error::StorageError;

/// Validates that an object key is a flat file name safe to use on any backend.
///
/// Keys are generated server-side, so a rejection here points at a caller bug
/// rather than user input.
pub fn validate_object_key(key: &str) -> Result<&str, StorageError> {
    if key.is_empty() || key.trim() != key {
        return Err(StorageError::InvalidKey(format!("{key:?} is empty or padded")));
    }

    // Control characters would end up in request paths and headers.
    if key.chars().any(|c| c.is_ascii_control()) {
        return Err(StorageError::InvalidKey(format!(
            "{key:?} contains control characters"
        )));
    }

    if key.contains('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(format!(
            "{key:?} contains a path separator"
        )));
    }

    if key.starts_with('.') {
        return Err(StorageError::InvalidKey(format!(
            "{key:?} starts with a dot"
        )));
    }

    Ok(key)
}
