//! Tests for HotelApiClient.
//!
//! Verifies request paths, authentication and query parameters against the mock hotel
//! API, caching of the catalog endpoints, and mapping of failures to HotelApiError.

use std::time::Duration;

use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;
use talya::{
    model::booking::SearchCriteria,
    server::{
        data::hotel_api::HotelApiClient,
        error::hotel_api::{Endpoint, HotelApiError},
    },
};
use talya_test_utils::{constant::TEST_HOTEL_ID, fixtures::hotel::hotel_path};

use super::*;

fn criteria() -> SearchCriteria {
    SearchCriteria {
        check_in: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
        adults: 3,
        children: 0,
        room_id: None,
    }
}

/// Expected: definitions decoded and fetched once within the cache time to live
#[tokio::test]
async fn caches_hotel_definitions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(
            factory::mock_definitions(
                vec![factory::mock_room(12, "Suit")],
                vec![factory::mock_board(1, "Bed & Breakfast")],
            ),
            1,
        )
        .build()
        .await;
    let client = test.hotel_api();

    let first = client.get_hotel_definitions().await;
    let second = client.get_hotel_definitions().await;

    assert!(first.is_ok());
    assert_eq!(first.unwrap(), second.unwrap());
    test.assert_mocks();

    Ok(())
}

/// Expected: a zero time to live fetches definitions on every call
#[tokio::test]
async fn zero_ttl_disables_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(factory::mock_definitions(vec![], vec![]), 2)
        .build()
        .await;
    let client = HotelApiClient::builder(&test.api_base_url(), &test.hotel_id, &test.bearer_token)
        .cache_ttl(Duration::ZERO)
        .build()
        .unwrap();

    assert!(client.get_hotel_definitions().await.is_ok());
    assert!(client.get_hotel_definitions().await.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Expected: a failed fetch is not cached, the next call retries
#[tokio::test]
async fn does_not_cache_failures() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", hotel_path("params").as_str())
                .match_query(Matcher::Any)
                .with_status(500)
                .expect(1)
                .create()
        })
        .with_params_endpoint(factory::mock_params(vec![]), 1)
        .build()
        .await;
    let client = test.hotel_api();

    assert!(client.get_hotel_params().await.is_err());
    assert!(client.get_hotel_params().await.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Expected: price offers requested with the stay, guest count, and configured locale
#[tokio::test]
async fn requests_price_offers_for_stay() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", hotel_path("price").as_str())
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("fromdate".into(), "2025-08-10".into()),
                    Matcher::UrlEncoded("todate".into(), "2025-08-15".into()),
                    Matcher::UrlEncoded("adult".into(), "3".into()),
                    Matcher::UrlEncoded("childage".into(), "".into()),
                    Matcher::UrlEncoded("nationality".into(), "".into()),
                    Matcher::UrlEncoded("promocode".into(), "".into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!([factory::mock_offer("offer-a", 12, 1, 640.0)]).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await;
    let client = test.hotel_api();

    let offers = client.get_price_offers(&criteria()).await;

    assert!(offers.is_ok());
    let offers = offers.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].offer_id, "offer-a");
    assert_eq!(offers[0].room_type_id, Some(12));
    assert_eq!(offers[0].effective_price(), 640.0);
    test.assert_mocks();

    Ok(())
}

/// Expected: every price lookup reaches the hotel API, offers are never cached
#[tokio::test]
async fn fetches_price_offers_on_every_call() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_price_endpoint(
            "2025-08-10",
            "2025-08-15",
            json!([factory::mock_offer("offer-a", 12, 1, 640.0)]),
            2,
        )
        .build()
        .await;
    let client = test.hotel_api();

    assert!(client.get_price_offers(&criteria()).await.is_ok());
    assert!(client.get_price_offers(&criteria()).await.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Expected: Err(HotelApiError::Status) carrying the endpoint and upstream status
#[tokio::test]
async fn maps_error_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_endpoint("price", 503, 1)
        .build()
        .await;
    let client = test.hotel_api();

    let result = client.get_price_offers(&criteria()).await;

    match result {
        Err(HotelApiError::Status { endpoint, status }) => {
            assert_eq!(endpoint, Endpoint::Price);
            assert_eq!(status.as_u16(), 503);
        }
        other => panic!("expected status error, got {:?}", other.map(|offers| offers.len())),
    }

    Ok(())
}

/// Expected: Err(HotelApiError::Request) when the body is not the expected schema
#[tokio::test]
async fn fails_on_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", hotel_path("hotel-definitions").as_str())
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"roomtype": [{"room-id": "not-a-number"}]}"#)
                .create()
        })
        .build()
        .await;
    let client = test.hotel_api();

    let result = client.get_hotel_definitions().await;

    assert!(matches!(
        result,
        Err(HotelApiError::Request {
            endpoint: Endpoint::HotelDefinitions,
            ..
        })
    ));

    Ok(())
}

/// Expected: requests without the configured bearer token are not answered by the mock
#[tokio::test]
async fn sends_bearer_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_params_endpoint(factory::mock_params(vec![]), 0)
        .build()
        .await;
    let client = HotelApiClient::builder(&test.api_base_url(), TEST_HOTEL_ID, "wrong-token")
        .build()
        .unwrap();

    assert!(client.get_hotel_params().await.is_err());
    test.assert_mocks();

    Ok(())
}
