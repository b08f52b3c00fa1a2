//! # Routes
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /health                                                         │
//! │                                                                         │
//! │  GET    /products?category=&q=&limit=                                   │
//! │  GET    /products/featured                                              │
//! │  GET    /products/{id}                                                  │
//! │  GET    /categories                                                     │
//! │                                                                         │
//! │  GET    /delivery/{postal_code}                                         │
//! │  POST   /age-gate                                                       │
//! │                                                                         │
//! │  POST   /carts                                                          │
//! │  GET    /carts/{cart_id}                                                │
//! │  DELETE /carts/{cart_id}                                                │
//! │  POST   /carts/{cart_id}/items                  add one unit            │
//! │  DELETE /carts/{cart_id}/items                  clear                   │
//! │  PUT    /carts/{cart_id}/items/{product_id}     set quantity            │
//! │  DELETE /carts/{cart_id}/items/{product_id}     remove line             │
//! │  POST   /carts/{cart_id}/items/{product_id}/increment                   │
//! │  POST   /carts/{cart_id}/items/{product_id}/decrement                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod age_gate;
pub mod cart;
pub mod delivery;
pub mod health;
pub mod products;

use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health::health))
        .route("/products", get(products::list_products))
        .route("/products/featured", get(products::featured_products))
        .route("/products/{id}", get(products::get_product))
        .route("/categories", get(products::list_categories))
        .route("/delivery/{postal_code}", get(delivery::check_delivery))
        .route("/age-gate", post(age_gate::verify_age))
        .route("/carts", post(cart::create_cart))
        .route("/carts/{cart_id}", get(cart::get_cart).delete(cart::delete_cart))
        .route(
            "/carts/{cart_id}/items",
            post(cart::add_item).delete(cart::clear_cart),
        )
        .route(
            "/carts/{cart_id}/items/{product_id}",
            put(cart::update_item).delete(cart::remove_item),
        )
        .route(
            "/carts/{cart_id}/items/{product_id}/increment",
            post(cart::increment_item),
        )
        .route(
            "/carts/{cart_id}/items/{product_id}/decrement",
            post(cart::decrement_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Route Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Days, Local, Months};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(config: StorefrontConfig) -> Router {
        create_router(AppState::with_builtin_catalog(config).unwrap())
    }

    fn app() -> Router {
        app_with(StorefrontConfig::default())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn new_cart(app: &Router) -> String {
        let (status, body) = send(app, "POST", "/carts", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["cartId"].as_str().unwrap().to_string()
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["products"], 11);
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let (status, body) = send(&app(), "GET", "/products?category=rum", None).await;
        assert_eq!(status, StatusCode::OK);

        let products = body.as_array().unwrap();
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p["category"] == "rum"));
        assert_eq!(products[0]["name"], "Old Monk");
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let (status, body) = send(&app(), "GET", "/products?category=whisky", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_search_and_limit() {
        let app = app();

        let (_, body) = send(&app, "GET", "/products?q=MONK", None).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"Old Monk"));

        let (_, body) = send(&app, "GET", "/products?limit=2", None).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_query_too_long() {
        let uri = format!("/products?q={}", "a".repeat(101));
        let (status, body) = send(&app(), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_featured_excludes_plain_low_rated() {
        let (_, body) = send(&app(), "GET", "/products/featured", None).await;
        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_u64().unwrap())
            .collect();

        assert!(ids.contains(&1));
        assert!(ids.contains(&11)); // discounted, rated 4.0
        assert!(!ids.contains(&9));
    }

    #[tokio::test]
    async fn test_get_product() {
        let app = app();

        let (status, body) = send(&app, "GET", "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], 850);
        assert!(!body["reviews"].as_array().unwrap().is_empty());

        let (status, body) = send(&app, "GET", "/products/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_categories() {
        let (_, body) = send(&app(), "GET", "/categories", None).await;
        let categories = body.as_array().unwrap();
        assert_eq!(categories.len(), 4);

        let total: u64 = categories.iter().map(|c| c["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 11);
    }

    // -------------------------------------------------------------------------
    // Delivery
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_delivery_lookup() {
        let app = app();

        let (status, body) = send(&app, "GET", "/delivery/110023", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "available": true, "area": "New Delhi", "etaRange": "30-45 mins" })
        );

        let (_, body) = send(&app, "GET", "/delivery/999999", None).await;
        assert_eq!(body, json!({ "available": false }));

        let (status, body) = send(&app, "GET", "/delivery/12ab", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_delay() {
        let mut config = StorefrontConfig::default();
        config.delivery.simulated_delay_ms = 1000;
        let app = app_with(config);

        let started = tokio::time::Instant::now();
        let (status, _) = send(&app, "GET", "/delivery/560001", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(started.elapsed() >= std::time::Duration::from_millis(1000));
    }

    // -------------------------------------------------------------------------
    // Age gate
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_age_gate() {
        let app = app();
        let today = Local::now().date_naive();
        let twenty_one = today.checked_sub_months(Months::new(21 * 12)).unwrap();
        let one_day_short = twenty_one.checked_add_days(Days::new(1)).unwrap();

        let (status, body) = send(
            &app,
            "POST",
            "/age-gate",
            Some(json!({ "birthDate": twenty_one.format("%Y-%m-%d").to_string() })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "allowed": true, "age": 21 }));

        let (status, body) = send(
            &app,
            "POST",
            "/age-gate",
            Some(json!({ "birthDate": one_day_short.format("%Y-%m-%d").to_string() })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "AGE_GATE_BLOCKED");
        assert_eq!(body["message"], "You must be 21 or older to access this site");
    }

    #[tokio::test]
    async fn test_age_gate_bad_input() {
        let app = app();

        let (status, body) = send(&app, "POST", "/age-gate", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please enter your birth date");

        let (status, _) = send(
            &app,
            "POST",
            "/age-gate",
            Some(json!({ "birthDate": "18/10/2000" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // -------------------------------------------------------------------------
    // Carts
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_new_cart_is_empty() {
        let app = app();
        let (status, body) = send(&app, "POST", "/carts", None).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["items"], json!([]));
        assert_eq!(body["itemCount"], 0);
        // Empty cart still pays the delivery fee: ₹50 in paise
        assert_eq!(body["totals"]["total"], 5000);
    }

    #[tokio::test]
    async fn test_add_same_product_twice() {
        let app = app();
        let cart = new_cart(&app).await;
        let uri = format!("/carts/{cart}/items");

        send(&app, "POST", &uri, Some(json!({ "productId": 1 }))).await;
        let (status, body) = send(&app, "POST", &uri, Some(json!({ "productId": 1 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["quantity"], 2);
        // 2 × ₹850 = ₹1700, GST ₹306, delivery ₹50
        assert_eq!(body["totals"]["subtotal"], 170_000);
        assert_eq!(body["totals"]["tax"], 30_600);
        assert_eq!(body["totals"]["deliveryFee"], 5_000);
        assert_eq!(body["totals"]["total"], 205_600);
    }

    #[tokio::test]
    async fn test_add_unavailable_leaves_cart_unchanged() {
        let app = app();
        let cart = new_cart(&app).await;
        let uri = format!("/carts/{cart}/items");

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "productId": 9 }))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "UNAVAILABLE");

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "productId": 404 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found: 404");

        let (_, body) = send(&app, "GET", &format!("/carts/{cart}"), None).await;
        assert_eq!(body["items"], json!([]));
    }

    #[tokio::test]
    async fn test_quantity_commands() {
        let app = app();
        let cart = new_cart(&app).await;
        send(&app, "POST", &format!("/carts/{cart}/items"), Some(json!({ "productId": 7 }))).await;
        let item = format!("/carts/{cart}/items/7");

        let (status, body) = send(&app, "PUT", &item, Some(json!({ "quantity": 5 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["itemCount"], 5);

        let (_, body) = send(&app, "POST", &format!("{item}/increment"), None).await;
        assert_eq!(body["itemCount"], 6);

        let (_, body) = send(&app, "POST", &format!("{item}/decrement"), None).await;
        assert_eq!(body["itemCount"], 5);

        let (status, body) = send(&app, "PUT", &item, Some(json!({ "quantity": 0 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, body) = send(&app, "PUT", &item, Some(json!({ "quantity": 100 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/carts/{cart}/items/8"),
            Some(json!({ "quantity": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_decrement_stops_at_one() {
        let app = app();
        let cart = new_cart(&app).await;
        send(&app, "POST", &format!("/carts/{cart}/items"), Some(json!({ "productId": 2 }))).await;

        let (status, body) =
            send(&app, "POST", &format!("/carts/{cart}/items/2/decrement"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["quantity"], 1);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let app = app();
        let cart = new_cart(&app).await;
        let items = format!("/carts/{cart}/items");
        send(&app, "POST", &items, Some(json!({ "productId": 1 }))).await;
        send(&app, "POST", &items, Some(json!({ "productId": 5 }))).await;

        // Removing something that is not there is a no-op
        let (status, body) = send(&app, "DELETE", &format!("{items}/8"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);

        let (_, body) = send(&app, "DELETE", &format!("{items}/1"), None).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["product"]["id"], 5);

        let (_, body) = send(&app, "DELETE", &items, None).await;
        assert_eq!(body["items"], json!([]));
        assert_eq!(body["totals"]["subtotal"], 0);
    }

    #[tokio::test]
    async fn test_free_delivery_over_threshold() {
        let app = app();
        let cart = new_cart(&app).await;
        send(&app, "POST", &format!("/carts/{cart}/items"), Some(json!({ "productId": 1 }))).await;

        // 3 × ₹850 = ₹2550 > ₹2000
        let (_, body) = send(
            &app,
            "PUT",
            &format!("/carts/{cart}/items/1"),
            Some(json!({ "quantity": 3 })),
        )
        .await;
        assert_eq!(body["totals"]["deliveryFee"], 0);
    }

    #[tokio::test]
    async fn test_delete_cart() {
        let app = app();
        let cart = new_cart(&app).await;

        let (status, _) = send(&app, "DELETE", &format!("/carts/{cart}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "GET", &format!("/carts/{cart}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_carts_are_isolated() {
        let app = app();
        let a = new_cart(&app).await;
        let b = new_cart(&app).await;
        send(&app, "POST", &format!("/carts/{a}/items"), Some(json!({ "productId": 3 }))).await;

        let (_, body) = send(&app, "GET", &format!("/carts/{b}"), None).await;
        assert_eq!(body["itemCount"], 0);
    }

    #[tokio::test]
    async fn test_cart_session_limit() {
        let mut config = StorefrontConfig::default();
        config.carts.max_sessions = 1;
        let app = app_with(config);
        new_cart(&app).await;

        let (status, body) = send(&app, "POST", "/carts", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "CART_ERROR");
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_cart_frees_its_slot() {
        let mut config = StorefrontConfig::default();
        config.carts.max_sessions = 1;
        config.carts.idle_timeout_secs = 60;
        let app = app_with(config);
        let abandoned = new_cart(&app).await;

        let (status, _) = send(&app, "POST", "/carts", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        tokio::time::advance(std::time::Duration::from_secs(60)).await;
        new_cart(&app).await;

        let (status, _) = send(&app, "GET", &format!("/carts/{abandoned}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
