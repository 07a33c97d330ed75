//! API integration tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use safari_quote_server::{
    api::create_router, config::AppConfig, models::RateSheet, quote::RateTable,
    repository::Repository, AppState,
};

const KENYA: &str = include_str!("../data/Kenya.json");

fn app() -> Router {
    let sheet: RateSheet = serde_json::from_str(KENYA).expect("Failed to parse sample rates");
    let table = RateTable::from_sheet(sheet).expect("Invalid sample rates");
    create_router(AppState::new(AppConfig::default(), Repository::new([("Kenya".to_string(), table)])))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_quote(body: Value) -> (StatusCode, Value) {
    send(
        Request::post("/api/v1/destinations/Kenya/quotes")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn amount(value: &Value) -> Decimal {
    value.as_str().expect("Amount is not a string").parse().expect("Invalid amount")
}

fn mara_trip(doubles: u32, nights: u32) -> Value {
    json!({
        "start_date": "2026-06-14",
        "end_date": "2026-06-17",
        "travelers": 2,
        "stays": [{
            "location": "Masai Mara",
            "room_type": "Tented Camp",
            "property": "Kilima Camp",
            "nights": nights,
            "rooms": { "doubles": doubles }
        }],
        "extras": [{ "name": "Balloon safari", "unit_price": "450", "quantity": 2 }]
    })
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get("/api/v1/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["destinations"], 1);
}

#[tokio::test]
async fn test_catalogue() {
    let (status, body) = get("/api/v1/destinations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!(["Kenya"]));

    let (_, body) = get("/api/v1/destinations/Kenya/locations").await;
    assert_eq!(body["items"], json!(["Amboseli", "Lake Nakuru", "Masai Mara"]));

    let (_, body) = get("/api/v1/destinations/Kenya/accommodations?location=Masai%20Mara").await;
    assert_eq!(body["items"], json!(["Tented Camp"]));

    let (_, body) = get(
        "/api/v1/destinations/Kenya/accommodations?location=Masai%20Mara&room_type=Tented%20Camp",
    )
    .await;
    assert_eq!(body["items"], json!(["Kilima Camp"]));

    let (status, _) = get("/api/v1/destinations/Uganda/locations").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_quote() {
    let (status, body) = post_quote(mara_trip(1, 3)).await;
    assert_eq!(status, StatusCode::CREATED);

    let pricing = &body["quotation"]["pricing"];
    // 3 nights x 2 pax x 130, 3 x 2 x 100, 4 days x 200, 2 x 30, 2 x 450
    assert_eq!(amount(&pricing["accommodation_total"]), dec!(780));
    assert_eq!(amount(&pricing["park_fee_total"]), dec!(600));
    assert_eq!(amount(&pricing["vehicle"]["total"]), dec!(800));
    assert_eq!(amount(&pricing["commission"]["total"]), dec!(60));
    assert_eq!(amount(&pricing["extras_total"]), dec!(900));
    assert_eq!(amount(&pricing["grand_total"]), dec!(3140));
    assert_eq!(amount(&pricing["per_person"]), dec!(1570));
    assert_eq!(body["quotation"]["trip"]["vehicles"], 1);
    assert_eq!(body["quotation"]["itinerary"].as_array().unwrap().len(), 4);
    assert!(body["report"].as_str().unwrap().contains("TOTAL TRIP COST: $3,140.00"));
}

#[tokio::test]
async fn test_itinerary_override() {
    let mut request = mara_trip(1, 3);
    request["itinerary"] = json!([{ "day": 2, "activities": "Hot air balloon" }]);
    let (status, body) = post_quote(request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quotation"]["itinerary"][1]["activities"], "Hot air balloon");

    let mut request = mara_trip(1, 3);
    request["itinerary"] = json!([{ "day": 12, "meal_plan": "BB" }]);
    let (status, _) = post_quote(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_occupancy_mismatch_is_unprocessable() {
    let (status, body) = post_quote(mara_trip(2, 3)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "OccupancyMismatch");
    assert_eq!(body["details"]["expected"], 2);
    assert_eq!(body["details"]["actual"], 4);
    assert_eq!(body["details"]["gap"]["direction"], "excess");
}

#[tokio::test]
async fn test_night_allocation_mismatch() {
    let (status, body) = post_quote(mara_trip(1, 2)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NightAllocationMismatch");
    assert_eq!(body["details"]["remaining"], 1);
}

#[tokio::test]
async fn test_validation_errors() {
    let mut request = mara_trip(1, 3);
    request["travelers"] = json!(0);
    let (status, _) = post_quote(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_quote(mara_trip(1, 0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut request = mara_trip(1, 3);
    request["stays"] = json!([]);
    let (status, _) = post_quote(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_numbers_are_rejected() {
    let mut request = mara_trip(1, 3);
    request["extras"] = json!([{
        "name": "Charter flight",
        "unit_price": "79228162514264337593543950335",
        "quantity": 2
    }]);
    let (status, body) = post_quote(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "AmountOverflow");
    assert_eq!(body["details"]["subject"], "additional charges");

    // 3 x 1431655766 must not wrap around to the two travelers
    let mut request = mara_trip(0, 3);
    request["stays"][0]["rooms"] = json!({ "triples": 1_431_655_766u32 });
    let (status, body) = post_quote(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "OccupancyMismatch");
    assert_eq!(body["details"]["actual"], 4_294_967_298u64);

    let mut request = mara_trip(1, 3);
    request["end_date"] = json!("2026-06-14");
    request["stays"] = json!([
        { "location": "Masai Mara", "room_type": "Tented Camp", "property": "Kilima Camp",
          "nights": u32::MAX, "rooms": { "doubles": 1 } },
        { "location": "Masai Mara", "room_type": "Tented Camp", "property": "Kilima Camp",
          "nights": 1, "rooms": { "doubles": 1 } }
    ]);
    let (status, body) = post_quote(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NightAllocationMismatch");
    assert_eq!(body["details"]["actual"], 4_294_967_296u64);
}
