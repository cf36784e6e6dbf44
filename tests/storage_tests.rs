use gamecenter_portal::config::AppConfig;
use gamecenter_portal::storage::{MockStorageService, S3StorageClient, StorageService};
use uuid::Uuid;

mod mock_tests {
    use super::*;

    #[tokio::test]
    async fn mock_presign_embeds_the_key() {
        let mock = MockStorageService::new();
        let key = "media/portada.png";
        let result = mock.get_presigned_upload_url(key, "image/png").await;
        assert!(result.is_ok());

        let url = result.unwrap();
        assert!(url.contains("signature=fake"));
        assert!(url.contains(key));
    }

    #[tokio::test]
    async fn failing_mock_reports_an_error() {
        let mock = MockStorageService::new_failing();
        let result = mock
            .get_presigned_upload_url("media/portada.png", "image/png")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn traversal_segments_are_stripped_from_keys() {
        let mock = MockStorageService::new();
        let result = mock
            .get_presigned_upload_url("../../etc/passwd", "text/plain")
            .await;
        assert!(result.is_ok());

        let url = result.unwrap();
        assert!(!url.contains(".."));
        assert!(url.contains("etc/passwd"));
    }
}

mod s3_tests {
    use super::*;

    #[tokio::test]
    async fn s3_client_builds_from_config() {
        // Construction must not panic, and presigning is purely local
        // cryptography: no network round-trip is needed to produce a URL.
        let client = S3StorageClient::new(&AppConfig::default()).await;

        let key = format!("media/{}.pdf", Uuid::new_v4());
        let result = client.get_presigned_upload_url(&key, "application/pdf").await;
        assert!(result.is_ok());

        let url = result.unwrap();
        assert!(url.contains("localhost:9000"));
        assert!(url.contains(&key));
    }
}
