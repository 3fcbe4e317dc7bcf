mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::setup_test_app;
use uuid::Uuid;

fn thumbnail_path(video_id: Uuid) -> String {
    format!("/api/videos/{}/thumbnail", video_id)
}

fn image_part(data: &[u8], filename: &str, mime: &str) -> Part {
    Part::bytes(data.to_vec()).file_name(filename).mime_type(mime)
}

#[tokio::test]
async fn test_thumbnail_upload_jpeg() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "thumbnail",
        image_part(b"jpeg-bytes", "thumb.jpg", "image/jpeg"),
    );
    let response = app
        .client()
        .post(&thumbnail_path(video.id))
        .add_header("Authorization", format!("Bearer {}", owner))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);

    // URL follows the local asset convention: <base>/<id>.<ext>
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["thumbnail_url"].as_str().unwrap(),
        format!("http://localhost:4000/assets/{}.jpg", video.id)
    );

    // Bytes written directly under the assets root, keyed by id + extension
    let written = std::fs::read(app.assets_path().join(format!("{}.jpg", video.id))).unwrap();
    assert_eq!(written, b"jpeg-bytes");
}

#[tokio::test]
async fn test_thumbnail_upload_png_maps_extension() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "thumbnail",
        image_part(b"png-bytes", "thumb.png", "image/png"),
    );
    let response = app
        .client()
        .post(&thumbnail_path(video.id))
        .add_header("Authorization", format!("Bearer {}", owner))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert!(body["thumbnail_url"]
        .as_str()
        .unwrap()
        .ends_with(&format!("{}.png", video.id)));
}

#[tokio::test]
async fn test_thumbnail_rejects_other_content_types() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "thumbnail",
        image_part(b"gif-bytes", "thumb.gif", "image/gif"),
    );
    let response = app
        .client()
        .post(&thumbnail_path(video.id))
        .add_header("Authorization", format!("Bearer {}", owner))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 415);
    assert!(std::fs::read_dir(app.assets_path()).unwrap().next().is_none());
}

#[tokio::test]
async fn test_thumbnail_rejects_oversized_payload() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    // Over the thumbnail cap (64 KiB in tests), under the video cap
    let big = vec![0u8; 65 * 1024];
    let form = MultipartForm::new().add_part(
        "thumbnail",
        image_part(&big, "thumb.jpg", "image/jpeg"),
    );
    let response = app
        .client()
        .post(&thumbnail_path(video.id))
        .add_header("Authorization", format!("Bearer {}", owner))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 413);
}

#[tokio::test]
async fn test_thumbnail_requires_ownership() {
    let app = setup_test_app().await;
    let video = app.seed_video(Uuid::new_v4()).await;

    let form = MultipartForm::new().add_part(
        "thumbnail",
        image_part(b"jpeg-bytes", "thumb.jpg", "image/jpeg"),
    );
    let response = app
        .client()
        .post(&thumbnail_path(video.id))
        .add_header("Authorization", format!("Bearer {}", Uuid::new_v4()))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_thumbnail_is_served_as_static_asset() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "thumbnail",
        image_part(b"jpeg-bytes", "thumb.jpg", "image/jpeg"),
    );
    app.client()
        .post(&thumbnail_path(video.id))
        .add_header("Authorization", format!("Bearer {}", owner))
        .multipart(form)
        .await
        .assert_status_ok();

    // No signing for thumbnails: the asset route serves the bytes directly
    let response = app
        .client()
        .get(&format!("/assets/{}.jpg", video.id))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), b"jpeg-bytes");
}
