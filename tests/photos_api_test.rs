use anyhow::Result;
use httpmock::prelude::*;
use mars_photos::{ClientConfig, ErrorKind, MarsPhotosClient, PhotosRequest};

fn client_for(server: &MockServer) -> MarsPhotosClient {
    let config = ClientConfig::new("test-key").with_base_url(server.base_url());
    MarsPhotosClient::new(config).unwrap()
}

fn mock_photo_response() -> serde_json::Value {
    serde_json::json!({
        "photos": [
            {
                "id": 123,
                "sol": 1000,
                "camera": {
                    "id": 1,
                    "name": "NAVCAM",
                    "rover_id": 5,
                    "full_name": "Navigation Camera"
                },
                "img_src": "https://mars.nasa.gov/photo.jpg",
                "earth_date": "2024-01-15",
                "rover": {
                    "id": 5,
                    "name": "curiosity",
                    "landing_date": "2012-08-06",
                    "launch_date": "2011-11-26",
                    "status": "active"
                }
            }
        ]
    })
}

#[tokio::test]
async fn test_fetches_photos_by_sol() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rovers/curiosity/photos")
            .query_param("sol", "1000")
            .query_param("camera", "NAVCAM")
            .query_param("page", "2")
            .query_param("api_key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_photo_response());
    });

    let request = PhotosRequest::new("curiosity", "1000")
        .with_camera("navcam")
        .with_page(2);
    let photos = client_for(&server).photos(&request).await?;

    api_mock.assert();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].id, Some(123));
    assert_eq!(photos[0].sol, Some(1000));
    Ok(())
}

#[tokio::test]
async fn test_fetches_photos_by_earth_date() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rovers/perseverance/photos")
            .query_param("earth_date", "2024-01-15")
            .query_param("api_key", "test-key");
        then.status(200).json_body(mock_photo_response());
    });

    let photos = client_for(&server)
        .photos(&PhotosRequest::new("Perseverance", "2024-01-15"))
        .await?;

    api_mock.assert();
    assert_eq!(photos.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_transforms_snake_case_to_camel_case() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rovers/curiosity/photos");
        then.status(200).json_body(mock_photo_response());
    });

    let photos = client_for(&server)
        .photos(&PhotosRequest::new("curiosity", "1000"))
        .await?;

    let photo = &photos[0];
    assert_eq!(photo.img_src.as_deref(), Some("https://mars.nasa.gov/photo.jpg"));
    assert_eq!(photo.earth_date.as_deref(), Some("2024-01-15"));

    let camera = photo.camera.as_ref().unwrap();
    assert_eq!(camera.rover_id, Some(5));
    assert_eq!(camera.full_name.as_deref(), Some("Navigation Camera"));

    let rover = photo.rover.as_ref().unwrap();
    assert_eq!(rover.landing_date.as_deref(), Some("2012-08-06"));
    assert_eq!(rover.launch_date.as_deref(), Some("2011-11-26"));

    let rendered = serde_json::to_string(&photos)?;
    assert!(rendered.contains("\"imgSrc\""));
    assert!(!rendered.contains("img_src"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_input_never_reaches_server() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(mock_photo_response());
    });
    let client = client_for(&server);

    let cases = [
        PhotosRequest::new("invalid", "1000"),
        PhotosRequest::new("curiosity", "01/15/2024"),
        PhotosRequest::new("curiosity", "1000").with_camera("PANCAM"),
        PhotosRequest::new("curiosity", "1000").with_page(0),
    ];

    for request in &cases {
        let err = client.photos(request).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "request {:?}", request);
    }

    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_calendar_invalid_date_is_forwarded() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rovers/curiosity/photos")
            .query_param("earth_date", "2024-13-40");
        then.status(200).json_body(serde_json::json!({"photos": []}));
    });

    let photos = client_for(&server)
        .photos(&PhotosRequest::new("curiosity", "2024-13-40"))
        .await?;

    api_mock.assert();
    assert!(photos.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_fetches_latest_photos() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rovers/curiosity/latest_photos")
            .query_param("api_key", "test-key");
        then.status(200).json_body(serde_json::json!({
            "latest_photos": mock_photo_response()["photos"].clone()
        }));
    });

    let photos = client_for(&server).latest_photos("CURIOSITY").await?;

    api_mock.assert();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].img_src.as_deref(), Some("https://mars.nasa.gov/photo.jpg"));
    Ok(())
}

#[tokio::test]
async fn test_api_error_is_surfaced_without_retry() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rovers/curiosity/photos");
        then.status(500);
    });

    let err = client_for(&server)
        .photos(&PhotosRequest::new("curiosity", "1000"))
        .await
        .unwrap_err();

    api_mock.assert_hits(1);
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rovers/spirit/latest_photos");
        then.status(200).body("not json");
    });

    let err = client_for(&server).latest_photos("spirit").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}
