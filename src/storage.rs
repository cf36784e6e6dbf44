use async_trait::async_trait;
use aws_sdk_s3 as s3;
use s3::presigning::PresigningConfig;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;

/// StorageService
///
/// The abstract contract for the object-storage layer holding dashboard media
/// (post covers, game art, member/authority photos, print files). The concrete
/// implementation is swappable: the real S3 client in production, the
/// in-memory mock in tests.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Ensures the configured bucket exists. Used in the `Env::Local` setup to
    /// provision the bucket in MinIO automatically. No-op in production.
    async fn ensure_bucket_exists(&self);

    /// Generates a temporary signed URL allowing the dashboard to upload a
    /// file directly to the bucket, constrained to the given content type.
    ///
    /// # Arguments
    /// * `key`: the final object key in the bucket.
    /// * `content_type`: the MIME type the upload is constrained to.
    async fn get_presigned_upload_url(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<String, String>;
}

/// S3StorageClient
///
/// The concrete implementation using the AWS SDK for S3. S3 compatibility
/// means the same client talks to a Dockerized MinIO locally and a hosted
/// S3-compatible store in production.
#[derive(Clone)]
pub struct S3StorageClient {
    client: s3::Client,
    bucket_name: String,
}

impl S3StorageClient {
    /// Constructs the client from the loaded application configuration.
    pub async fn new(config: &AppConfig) -> Self {
        let credentials =
            s3::config::Credentials::new(&config.s3_key, &config.s3_secret, None, None, "static");

        let s3_config = s3::Config::builder()
            .credentials_provider(credentials)
            .endpoint_url(&config.s3_endpoint)
            .region(s3::config::Region::new(config.s3_region.clone()))
            .behavior_version_latest()
            // Path-style addressing (http://endpoint/bucket/key) is required
            // for MinIO-style gateways.
            .force_path_style(true)
            .build();

        Self {
            client: s3::Client::from_conf(s3_config),
            bucket_name: config.s3_bucket.clone(),
        }
    }
}

/// Uploads expire after 10 minutes.
const PRESIGN_EXPIRY: Duration = Duration::from_secs(600);

#[async_trait]
impl StorageService for S3StorageClient {
    /// Calls the S3 CreateBucket API. The call is idempotent, so it only
    /// creates the bucket when missing and is safe at every startup.
    async fn ensure_bucket_exists(&self) {
        let _ = self
            .client
            .create_bucket()
            .bucket(&self.bucket_name)
            .send()
            .await;
    }

    async fn get_presigned_upload_url(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<String, String> {
        let presigned_req = self
            .client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            // The signed URL forces the client request to carry this
            // Content-Type header.
            .content_type(content_type)
            .presigned(PresigningConfig::expires_in(PRESIGN_EXPIRY).map_err(|e| e.to_string())?)
            .await
            .map_err(|e| e.to_string())?;

        Ok(presigned_req.uri().to_string())
    }
}

/// Strips directory-navigation components (`..`, `.`, empty segments) from a
/// user-influenced key.
fn sanitize_key(key: &str) -> String {
    key.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".." && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// MockStorageService
///
/// Mock implementation used by unit and integration tests, so handler logic is
/// exercised without a network connection to S3.
#[derive(Clone)]
pub struct MockStorageService {
    /// When true, all operations return a simulated failure.
    pub should_fail: bool,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockStorageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn ensure_bucket_exists(&self) {
        // No-op in mock environment.
    }

    async fn get_presigned_upload_url(
        &self,
        key: &str,
        _content_type: &str,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("Mock storage error: simulation requested".to_string());
        }

        // Deterministic, local-style URL for mock assertions.
        Ok(format!(
            "http://localhost:9000/mock-bucket/{}?signature=fake",
            sanitize_key(key)
        ))
    }
}

/// StorageState
///
/// The concrete type used to share the storage service across the application
/// state.
pub type StorageState = Arc<dyn StorageService>;
