//! Tests for the get_gallery endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use talya::{
    model::{
        api::ErrorDto,
        gallery::{GalleryImageDto, DEFAULT_IMAGE_CAPTION},
    },
    server::{controller::gallery::get_gallery, error::hotel_api::UPSTREAM_UNAVAILABLE_MESSAGE},
};

use super::*;

/// Expected: Ok with 200 OK, images without a URL dropped and missing captions defaulted
#[tokio::test]
async fn returns_gallery_images() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_params_endpoint(
            factory::mock_params(vec![
                factory::mock_gallery_image(1, "https://cdn.example.com/pool.jpg", Some("Pool")),
                factory::mock_gallery_image(2, "", Some("Broken")),
                factory::mock_gallery_image(3, "https://cdn.example.com/lobby.jpg", None),
            ]),
            1,
        )
        .build()
        .await;

    let result = get_gallery(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let images: Vec<GalleryImageDto> = response_json(resp).await?;
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].caption, "Pool");
    assert_eq!(images[1].id, 3);
    assert_eq!(images[1].caption, DEFAULT_IMAGE_CAPTION);

    test.assert_mocks();

    Ok(())
}

/// Expected: Ok with 200 OK and an empty list when the hotel has no images
#[tokio::test]
async fn returns_empty_gallery() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_params_endpoint(factory::mock_params(vec![]), 1)
        .build()
        .await;

    let result = get_gallery(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let images: Vec<GalleryImageDto> = response_json(result.unwrap().into_response()).await?;
    assert!(images.is_empty());

    Ok(())
}

/// Expected: Err with 502 Bad Gateway and a generic message when the params call fails
#[tokio::test]
async fn fails_when_hotel_api_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_endpoint("params", 503, 1)
        .build()
        .await;

    let result = get_gallery(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, UPSTREAM_UNAVAILABLE_MESSAGE);

    Ok(())
}
