use gallery_service::config::GalleryConfig;
use gallery_service::startup::Application;
use std::path::PathBuf;
use uuid::Uuid;

/// A gallery service running on a random port with its own upload directory.
pub struct TestService {
    pub address: String,
    pub root: PathBuf,
}

impl TestService {
    pub async fn spawn() -> Self {
        let root = PathBuf::from(format!("target/test-uploads-{}", Uuid::new_v4()));
        let mut config = GalleryConfig::with_dirs(root.join("uploads"), root.join("public"));
        config.common.port = 0;

        let app = Application::build(config)
            .await
            .expect("Failed to build gallery service");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(format!("{}/health", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestService { address, root }
    }

    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.root).await;
    }
}
