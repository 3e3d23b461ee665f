// tests/dashboard_api_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use serde_json::Value;
use serial_test::serial;

async fn dashboard(uri: &str) -> Value {
  let app = init_app!(default_state());
  let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  test::read_body_json(resp).await
}

fn names(body: &Value) -> Vec<String> {
  body["games"]["items"]
    .as_array()
    .map(|items| items.iter().map(|g| g["gameName"].as_str().unwrap_or_default().to_string()).collect())
    .unwrap_or_default()
}

#[actix_rt::test]
#[serial]
async fn test_unfiltered_dashboard_lists_everything() {
  setup_tracing();
  let body = dashboard("/api/dashboard").await;
  assert_eq!(body["games"]["totalItems"], 5);
  assert_eq!(body["games"]["perPage"], 12);
  assert_eq!(body["categories"], serde_json::json!(["RPG", "Shooter", "Racing"]));
  assert!(body["keyword"].is_null());
  assert!(body["category"].is_null());
}

#[actix_rt::test]
#[serial]
async fn test_category_filter_returns_exact_subset() {
  setup_tracing();
  let body = dashboard("/api/dashboard?category=RPG").await;
  assert_eq!(names(&body), vec!["God of War: Ragnarok", "Horizon Forbidden West"]);
  assert_eq!(body["category"], "RPG");
}

#[actix_rt::test]
#[serial]
async fn test_keyword_searches_description_and_platform() {
  setup_tracing();
  let body = dashboard("/api/dashboard?keyword=norse").await;
  assert_eq!(names(&body), vec!["God of War: Ragnarok"]);

  let body = dashboard("/api/dashboard?keyword=pc").await;
  assert_eq!(names(&body), vec!["Valorant", "Apex Legends"]);
  assert_eq!(body["keyword"], "pc");
}

#[actix_rt::test]
#[serial]
async fn test_category_wins_over_keyword() {
  setup_tracing();
  let body = dashboard("/api/dashboard?keyword=valorant&category=Racing").await;
  assert_eq!(names(&body), vec!["Assetto Corsa"]);
  assert!(body["keyword"].is_null());
}

#[actix_rt::test]
#[serial]
async fn test_pagination_and_out_of_range_page() {
  setup_tracing();
  let body = dashboard("/api/dashboard?page=2&perPage=2").await;
  assert_eq!(names(&body), vec!["Horizon Forbidden West", "Apex Legends"]);
  assert_eq!(body["games"]["totalPages"], 3);

  let body = dashboard("/api/dashboard?page=7&perPage=2").await;
  assert!(names(&body).is_empty());
  assert_eq!(body["games"]["totalItems"], 5);
}

#[actix_rt::test]
#[serial]
async fn test_games_carry_purchase_links() {
  setup_tracing();
  let body = dashboard("/api/dashboard?perPage=1").await;
  assert_eq!(
    body["games"]["items"][0]["purchaseUrl"],
    "/billing?gameId=1&gameName=God+of+War%3A+Ragnarok&price=999&platform=PS5&imageUrl=%2Fgames%2Fgow.jpg"
  );
}

#[actix_rt::test]
#[serial]
async fn test_dashboard_upstream_failure() {
  setup_tracing();
  let app = init_app!(state_with_source(FakeCatalogSource::failing("dns")));
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/dashboard").to_request()).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
