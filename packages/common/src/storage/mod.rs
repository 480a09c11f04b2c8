mod config;
mod error;
mod key;
mod traits;

pub mod filesystem;
#[cfg(feature = "object-storage")]
pub mod s3;

use std::sync::Arc;

pub use config::{StorageBackend, StorageConfig};
pub use error::StorageError;
pub use key::validate_object_key;
pub use traits::ObjectStore;

/// Build the object store selected by `config.backend`.
pub async fn build_object_store(
    config: &StorageConfig,
) -> Result<Arc<dyn ObjectStore>, StorageError> {
    match config.backend {
        StorageBackend::Filesystem => {
            let base_url = config
                .public_base_url
                .clone()
                .unwrap_or_else(|| format!("file://{}", config.data_dir.display()));
            let store = filesystem::FilesystemObjectStore::new(config.data_dir.clone(), base_url)
                .await?;
            Ok(Arc::new(store))
        }
        #[cfg(feature = "object-storage")]
        StorageBackend::S3 => {
            let store = s3::S3ObjectStore::new(&config.endpoint, &config.region, &config.bucket)?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "object-storage"))]
        StorageBackend::S3 => Err(StorageError::Unsupported(
            "built without the `object-storage` feature".into(),
        )),
    }
}
