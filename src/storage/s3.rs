//! AWS S3 datalake uploads.
//!
//! Objects land under date-derived keys:
//! - raw response: `datalake/raw/raw-views-YYYY-MM-DD.txt`
//! - JSON lines: `datalake/views/views-YYYY-MM-DD.json`

use std::path::Path;

use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use log::info;

use crate::error::{AppError, Result};
use crate::models::StorageConfig;

/// S3-backed datalake store.
pub struct S3Store {
    client: Client,
    bucket: String,
    region: String,
}

impl S3Store {
    /// Create a new S3 store instance.
    pub fn new(client: Client, bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    /// Create an S3 store from storage configuration, using the default
    /// AWS credential chain.
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);
        Ok(Self::new(client, &config.bucket, &config.region))
    }

    /// The configured bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Ensure the bucket exists, creating it in the configured region if
    /// it is absent.
    pub async fn ensure_bucket(&self) -> Result<()> {
        let listing = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| AppError::s3(e.into_service_error()))?;

        let exists = listing
            .buckets()
            .iter()
            .any(|b| b.name() == Some(self.bucket.as_str()));

        if exists {
            return Ok(());
        }

        let constraint = BucketLocationConstraint::from(self.region.as_str());
        let bucket_config = CreateBucketConfiguration::builder()
            .location_constraint(constraint)
            .build();

        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .create_bucket_configuration(bucket_config)
            .send()
            .await
            .map_err(|e| AppError::s3(e.into_service_error()))?;

        info!("Created bucket {} in {}", self.bucket, self.region);
        Ok(())
    }

    /// Upload a local file's full contents to a key, overwriting any
    /// existing object.
    pub async fn upload_file(&self, path: &Path, key: &str) -> Result<()> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| AppError::s3(e))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::s3(e.into_service_error()))?;

        info!("Uploaded {} to s3://{}/{}", path.display(), self.bucket, key);
        Ok(())
    }

    /// Verify an object exists after upload via a metadata check.
    pub async fn verify(&self, key: &str) -> Result<()> {
        self.client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::s3(format!(
                    "object s3://{}/{} missing after upload: {}",
                    self.bucket,
                    key,
                    e.into_service_error()
                ))
            })?;
        Ok(())
    }
}
