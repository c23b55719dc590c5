mod common;

use common::TestApp;
use reqwest::multipart;

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

#[tokio::test]
async fn upload_image_works() {
    let app = TestApp::spawn().await;

    let response = app
        .upload(Some("baku"), "photo.jpg", "image/jpeg", JPEG_BYTES.to_vec())
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "File uploaded successfully!");

    let file = body["file"].as_str().unwrap();
    assert!(file.starts_with("baku-"));
    assert!(file.ends_with("-photo.jpg"));

    // Stored under the generated name with the uploaded bytes.
    let stored = tokio::fs::read(app.upload_dir.join(file)).await.unwrap();
    assert_eq!(stored, JPEG_BYTES);

    // And listed / served back.
    let urls = app.list_urls("baku").await;
    assert_eq!(urls, vec![format!("/uploads/{}", file)]);

    let served = app
        .client
        .get(format!("{}{}", app.address, urls[0]))
        .send()
        .await
        .unwrap();
    assert_eq!(served.status().as_u16(), 200);
    assert_eq!(served.bytes().await.unwrap().as_ref(), JPEG_BYTES);

    app.cleanup().await;
}

#[tokio::test]
async fn upload_adds_exactly_one_url() {
    let app = TestApp::spawn().await;
    app.upload(Some("ganja"), "a.png", "image/png", vec![1, 2, 3]).await;
    let before = app.list_urls("ganja").await;

    let response = app.upload(Some("ganja"), "b.png", "image/png", vec![4, 5, 6]).await;
    assert_eq!(response.status().as_u16(), 201);

    let after = app.list_urls("ganja").await;
    assert_eq!(after.len(), before.len() + 1);
    assert!(after
        .iter()
        .all(|url| url.starts_with("/uploads/ganja-")));

    app.cleanup().await;
}

#[tokio::test]
async fn non_image_upload_is_rejected_and_not_stored() {
    let app = TestApp::spawn().await;

    let response = app
        .upload(Some("baku"), "notes.txt", "text/plain", b"hello".to_vec())
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Not an image! Please upload only images.");
    assert!(app.stored_files().await.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let app = TestApp::spawn().await;

    let form = multipart::Form::new().text("region", "baku");
    let response = app
        .client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "File upload failed. Please ensure you are uploading an image."
    );

    app.cleanup().await;
}

#[tokio::test]
async fn missing_region_is_stored_as_unknown() {
    let app = TestApp::spawn().await;

    let response = app.upload(None, "my cat.gif", "image/gif", vec![7; 16]).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    let file = body["file"].as_str().unwrap();
    assert!(file.starts_with("unknown-"));
    assert!(file.ends_with("-my-cat.gif"));

    app.cleanup().await;
}

#[tokio::test]
async fn region_field_may_follow_the_file() {
    let app = TestApp::spawn().await;

    let form = multipart::Form::new()
        .part(
            "image",
            multipart::Part::bytes(vec![1, 2, 3])
                .file_name("late.png")
                .mime_str("image/png")
                .unwrap(),
        )
        .text("region", "sheki");
    let response = app
        .client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["file"].as_str().unwrap().starts_with("sheki-"));

    app.cleanup().await;
}

#[tokio::test]
async fn region_escaping_upload_dir_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .upload(Some("../outside"), "photo.jpg", "image/jpeg", vec![1])
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(app.stored_files().await.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn second_image_part_is_rejected() {
    let app = TestApp::spawn().await;

    let part = |name: &str| {
        multipart::Part::bytes(vec![1, 2, 3])
            .file_name(name.to_string())
            .mime_str("image/png")
            .unwrap()
    };
    let form = multipart::Form::new()
        .text("region", "baku")
        .part("image", part("one.png"))
        .part("image", part("two.png"));

    let response = app
        .client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert!(app.stored_files().await.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn concurrent_uploads_produce_distinct_files() {
    let app = TestApp::spawn().await;

    let uploads = (0..8).map(|_| app.upload(Some("baku"), "same.jpg", "image/jpeg", vec![9; 32]));
    let responses = futures::future::join_all(uploads).await;

    let mut files = Vec::new();
    for response in responses {
        assert_eq!(response.status().as_u16(), 201);
        let body: serde_json::Value = response.json().await.unwrap();
        files.push(body["file"].as_str().unwrap().to_string());
    }

    files.sort();
    files.dedup();
    assert_eq!(files.len(), 8);
    assert_eq!(app.list_urls("baku").await.len(), 8);

    app.cleanup().await;
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let root = std::path::PathBuf::from(format!("target/test-uploads-{}", uuid::Uuid::new_v4()));
    let mut config =
        gallery_service::config::GalleryConfig::with_dirs(root.join("uploads"), root.join("public"));
    config.limits.max_upload_bytes = 1024;
    let app = TestApp::spawn_with(config, root).await;

    let response = app
        .upload(Some("baku"), "big.jpg", "image/jpeg", vec![0; 8 * 1024])
        .await;

    assert_eq!(response.status().as_u16(), 413);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].is_string());
    assert!(app.stored_files().await.is_empty());

    app.cleanup().await;
}
