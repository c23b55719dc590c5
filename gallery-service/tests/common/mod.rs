#![allow(dead_code)]

use gallery_service::config::GalleryConfig;
use gallery_service::startup::Application;
use reqwest::multipart;
use std::path::PathBuf;
use uuid::Uuid;

pub const INDEX_HTML: &str = "<!doctype html><title>Gallery</title>";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub root: PathBuf,
    pub upload_dir: PathBuf,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawns the service on a random port with a fresh, not yet existing
    /// upload directory.
    pub async fn spawn() -> Self {
        let root = PathBuf::from(format!("target/test-uploads-{}", Uuid::new_v4()));
        let public_dir = root.join("public");
        let upload_dir = public_dir.join("uploads");

        tokio::fs::create_dir_all(&public_dir)
            .await
            .expect("Failed to create public dir");
        tokio::fs::write(public_dir.join("index.html"), INDEX_HTML)
            .await
            .expect("Failed to write index.html");

        Self::spawn_with(GalleryConfig::with_dirs(&upload_dir, &public_dir), root).await
    }

    pub async fn spawn_with(mut config: GalleryConfig, root: PathBuf) -> Self {
        config.common.port = 0; // Random port for testing
        let upload_dir = config.storage.upload_dir.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            root,
            upload_dir,
            client,
        }
    }

    pub async fn upload(
        &self,
        region: Option<&str>,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> reqwest::Response {
        let mut form = multipart::Form::new();
        if let Some(region) = region {
            form = form.text("region", region.to_string());
        }
        form = form.part(
            "image",
            multipart::Part::bytes(data)
                .file_name(file_name.to_string())
                .mime_str(content_type)
                .unwrap(),
        );

        self.client
            .post(format!("{}/upload", self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list(&self, region: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/images/{}", self.address, region))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_urls(&self, region: &str) -> Vec<String> {
        let response = self.list(region).await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn stored_files(&self) -> Vec<String> {
        let mut names = Vec::new();
        let Ok(mut entries) = tokio::fs::read_dir(&self.upload_dir).await else {
            return names;
        };
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names
    }

    /// Cleanup test resources (upload and public directories).
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.root).await;
    }
}
