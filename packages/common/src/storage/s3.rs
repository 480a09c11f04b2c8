use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};

use super::error::StorageError;
use super::key::validate_object_key;
use super::traits::ObjectStore;

/// S3-compatible object store. Every object is uploaded with a `public-read` ACL.
///
/// Credentials are resolved from the standard AWS environment variables or
/// profile files.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    public_base_url: String,
}

impl S3ObjectStore {
    pub fn new(endpoint: &str, region: &str, bucket_name: &str) -> Result<Self, StorageError> {
        let credentials =
            Credentials::default().map_err(|e| StorageError::Client(e.to_string()))?;
        let region = Region::Custom {
            region: region.to_owned(),
            endpoint: endpoint.to_owned(),
        };

        let mut bucket = Bucket::new(bucket_name, region, credentials)
            .map_err(|e| StorageError::Client(e.to_string()))?
            .with_path_style();
        bucket.add_header("x-amz-acl", "public-read");

        Ok(Self {
            bucket,
            public_base_url: public_base_url(endpoint, bucket_name),
        })
    }
}

/// `{endpoint}/{bucket}`, the path-style prefix of every public object URL.
pub fn public_base_url(endpoint: &str, bucket_name: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), bucket_name)
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_public(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let key = validate_object_key(key)?;

        let response = self
            .bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| StorageError::Client(e.to_string()))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            let message = String::from_utf8_lossy(response.as_slice()).into_owned();
            tracing::warn!(key, status, "object store rejected upload");
            return Err(StorageError::Rejected { status, message });
        }

        Ok(format!("{}/{}", self.public_base_url, key))
    }
}
