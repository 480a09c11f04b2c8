use async_trait::async_trait;

use super::error::StorageError;

/// Key-addressed object storage with publicly readable objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key` with the given content type, readable by anyone.
    ///
    /// Returns the public URL of the stored object. A single attempt is made;
    /// failures are returned to the caller as-is.
    async fn put_public(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;
}
