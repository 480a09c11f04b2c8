use std::path::PathBuf;

use serde::Deserialize;

/// Which object store backend serves uploads.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// S3-compatible remote bucket.
    #[default]
    S3,
    /// Local directory, intended for development and tests.
    Filesystem,
}

/// Object storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Default: `s3`.
    #[serde(default)]
    pub backend: StorageBackend,
    /// S3 endpoint. Default: "https://storage.yandexcloud.net".
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// S3 region. Default: "ru-central1".
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket that receives uploads. Default: "poehali-user-uploads".
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Root directory for the filesystem backend. Default: "./data/uploads".
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// URL prefix the filesystem backend reports for stored objects.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

fn default_endpoint() -> String {
    "https://storage.yandexcloud.net".into()
}
fn default_region() -> String {
    "ru-central1".into()
}
fn default_bucket() -> String {
    "poehali-user-uploads".into()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/uploads")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            endpoint: default_endpoint(),
            region: default_region(),
            bucket: default_bucket(),
            data_dir: default_data_dir(),
            public_base_url: None,
        }
    }
}
