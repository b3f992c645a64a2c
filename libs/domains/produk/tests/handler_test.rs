//! Handler tests for the produk domain
//!
//! The router is driven with `oneshot`, backed either by the in-memory
//! repository (CRUD behaviour) or by a SeaORM mock connection (database
//! failure responses and the SQL path).

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_produk::*;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use serde_json::{Value as Json, json};
use std::collections::BTreeMap;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn in_memory_app() -> Router {
    let repository = InMemoryProductRepository::new()
        .with_merk(1, "Asus")
        .with_kategori(2, "Laptop");
    handlers::router(ProductService::new(repository))
}

fn mock_app(db: MockDatabase) -> Router {
    let repository = MySqlProductRepository::new(db.into_connection());
    handlers::router(ProductService::new(repository))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: Json) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create(app: &Router, body: Json) -> u64 {
    let response = app
        .clone()
        .oneshot(with_json("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: CreatedProduct = json_body(response.into_body()).await;
    created.inserted_id
}

#[tokio::test]
async fn test_create_then_list_shows_joined_names() {
    let app = in_memory_app();

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/",
            json!({ "nama_produk": "Laptop X", "merk_id": 1, "kategori_id": 2, "harga": 15000000 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["message"], messages::CREATED);
    assert!(body["insertedId"].is_u64());

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Json> = json_body(response.into_body()).await;
    let laptop = products
        .iter()
        .find(|p| p["nama_produk"] == "Laptop X")
        .expect("created product is listed");
    assert_eq!(laptop["nama_merk"], "Asus");
    assert_eq!(laptop["nama_kategori"], "Laptop");
    assert_eq!(laptop["harga"], "15000000");
}

#[tokio::test]
async fn test_get_returns_supplied_required_fields() {
    let app = in_memory_app();
    let id = create(
        &app,
        json!({ "nama_produk": "Mouse M1", "merk_id": 1, "kategori_id": 7, "tahun_rilis": 2023 }),
    )
    .await;

    let response = app.oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: ProductDetail = json_body(response.into_body()).await;
    assert_eq!(product.id as u64, id);
    assert_eq!(product.nama_produk, "Mouse M1");
    assert_eq!(product.merk_id, Some(1));
    assert_eq!(product.kategori_id, Some(7));
    assert_eq!(product.tahun_rilis, Some(2023));
    assert_eq!(product.nama_kategori, None);
}

#[tokio::test]
async fn test_list_is_ordered_by_ascending_id() {
    let app = in_memory_app();
    for name in ["Zeta", "Alpha", "Mid"] {
        create(&app, json!({ "nama_produk": name, "merk_id": 1, "kategori_id": 2 })).await;
    }

    let response = app.oneshot(get("/")).await.unwrap();
    let products: Vec<ProductSummary> = json_body(response.into_body()).await;

    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let response = in_memory_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Json> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_without_nama_produk_is_rejected_and_inserts_nothing() {
    let app = in_memory_app();

    let response = app
        .clone()
        .oneshot(with_json("POST", "/", json!({ "merk_id": 1, "kategori_id": 2 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "message": messages::REQUIRED_FIELDS }));

    let products: Vec<Json> = json_body(app.oneshot(get("/")).await.unwrap().into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_with_zero_or_empty_required_fields_is_rejected() {
    let app = in_memory_app();

    for body in [
        json!({ "nama_produk": "", "merk_id": 1, "kategori_id": 2 }),
        json!({ "nama_produk": "X", "merk_id": 0, "kategori_id": 2 }),
        json!({ "nama_produk": "X", "merk_id": 1, "kategori_id": null }),
    ] {
        let response = app
            .clone()
            .oneshot(with_json("POST", "/", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_missing_id_is_not_found_everywhere_and_changes_nothing() {
    let app = in_memory_app();
    let id = create(&app, json!({ "nama_produk": "Keep", "merk_id": 1, "kategori_id": 2 })).await;

    for request in [
        get("/9999"),
        with_json("PUT", "/9999", json!({ "nama_produk": "Changed" })),
        delete("/9999"),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Json = json_body(response.into_body()).await;
        assert_eq!(body["message"], messages::NOT_FOUND);
    }

    let product: ProductDetail =
        json_body(app.oneshot(get(&format!("/{id}"))).await.unwrap().into_body()).await;
    assert_eq!(product.nama_produk, "Keep");
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let response = in_memory_app().oneshot(get("/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = in_memory_app();
    let id = create(&app, json!({ "nama_produk": "Tmp", "merk_id": 1, "kategori_id": 2 })).await;

    let response = app.clone().oneshot(delete(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductMessage = json_body(response.into_body()).await;
    assert_eq!(body.message, messages::deleted(&id.to_string()));

    let response = app.oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// Fields left out are written as NULL. `nama_produk` is NOT NULL, so it is
// always sent here; its absence is covered separately.
#[tokio::test]
async fn test_update_is_a_full_overwrite() {
    let app = in_memory_app();
    let id = create(
        &app,
        json!({ "nama_produk": "Laptop X", "tahun_rilis": 2022, "merk_id": 1, "kategori_id": 2, "harga": 100 }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(with_json(
            "PUT",
            &format!("/{id}"),
            json!({ "nama_produk": "Laptop X2", "merk_id": 3, "kategori_id": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductMessage = json_body(response.into_body()).await;
    assert_eq!(body.message, messages::updated(&id.to_string()));

    let product: ProductDetail =
        json_body(app.oneshot(get(&format!("/{id}"))).await.unwrap().into_body()).await;
    assert_eq!(product.nama_produk, "Laptop X2");
    assert_eq!(product.merk_id, Some(3));
    assert_eq!(product.kategori_id, Some(2));
    assert_eq!(product.tahun_rilis, None);
    assert_eq!(product.harga, None);
    assert_eq!(product.nama_merk, None);
}

#[tokio::test]
async fn test_create_and_update_accept_numeric_strings() {
    let app = in_memory_app();
    let id = create(
        &app,
        json!({
            "nama_produk": "Laptop X",
            "merk_id": "1",
            "kategori_id": "2",
            "tahun_rilis": "2024",
            "harga": "15000000"
        }),
    )
    .await;

    let product: ProductDetail =
        json_body(app.clone().oneshot(get(&format!("/{id}"))).await.unwrap().into_body()).await;
    assert_eq!(product.merk_id, Some(1));
    assert_eq!(product.kategori_id, Some(2));
    assert_eq!(product.tahun_rilis, Some(2024));
    assert_eq!(product.nama_merk.as_deref(), Some("Asus"));

    let response = app
        .clone()
        .oneshot(with_json(
            "PUT",
            &format!("/{id}"),
            json!({ "nama_produk": "Laptop X2", "merk_id": "3", "kategori_id": "2", "tahun_rilis": "2025" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: ProductDetail =
        json_body(app.oneshot(get(&format!("/{id}"))).await.unwrap().into_body()).await;
    assert_eq!(product.merk_id, Some(3));
    assert_eq!(product.tahun_rilis, Some(2025));
}

#[tokio::test]
async fn test_create_with_blank_string_id_is_rejected() {
    let response = in_memory_app()
        .oneshot(with_json(
            "POST",
            "/",
            json!({ "nama_produk": "X", "merk_id": "", "kategori_id": "2" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["message"], messages::REQUIRED_FIELDS);
}

#[tokio::test]
async fn test_create_without_body_fails_presence_check() {
    let app = in_memory_app();

    let requests = [
        Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::empty())
            .unwrap(),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Json = json_body(response.into_body()).await;
        assert_eq!(body, json!({ "message": messages::REQUIRED_FIELDS }));
    }

    let products: Vec<Json> = json_body(app.oneshot(get("/")).await.unwrap().into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_update_without_nama_produk_fails_like_the_database() {
    let app = in_memory_app();
    let id = create(&app, json!({ "nama_produk": "Keep", "merk_id": 1, "kategori_id": 2 })).await;

    let response = app
        .clone()
        .oneshot(with_json("PUT", &format!("/{id}"), json!({ "merk_id": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["message"], messages::UPDATE_FAILED);
    assert!(body["error"].as_str().unwrap().contains("cannot be null"));

    let product: ProductDetail =
        json_body(app.oneshot(get(&format!("/{id}"))).await.unwrap().into_body()).await;
    assert_eq!(product.nama_produk, "Keep");
}

#[tokio::test]
async fn test_non_numeric_string_id_field_is_unprocessable() {
    let response = in_memory_app()
        .oneshot(with_json(
            "POST",
            "/",
            json!({ "nama_produk": "X", "merk_id": "satu", "kategori_id": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["message"], axum_helpers::errors::messages::INVALID_BODY);
}

#[tokio::test]
async fn test_malformed_json_is_rejected_with_message() {
    let response = in_memory_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{\"nama_produk\":"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["message"], axum_helpers::errors::messages::INVALID_JSON);
}

#[tokio::test]
async fn test_list_database_failure_includes_error_and_hint() {
    let app = mock_app(MockDatabase::new(DatabaseBackend::MySql));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["message"], messages::LIST_FAILED);
    assert_eq!(body["hint"], messages::LIST_FAILED_HINT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_write_database_failures_have_no_hint() {
    let cases = [
        (
            with_json("POST", "/", json!({ "nama_produk": "X", "merk_id": 1, "kategori_id": 2 })),
            messages::CREATE_FAILED,
        ),
        (
            with_json("PUT", "/1", json!({ "nama_produk": "X" })),
            messages::UPDATE_FAILED,
        ),
        (delete("/1"), messages::DELETE_FAILED),
        (get("/1"), messages::GET_FAILED),
    ];

    for (request, message) in cases {
        let app = mock_app(MockDatabase::new(DatabaseBackend::MySql));
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Json = json_body(response.into_body()).await;
        assert_eq!(body["message"], message);
        assert!(body["error"].is_string());
        assert!(body.get("hint").is_none());
    }
}

#[tokio::test]
async fn test_mysql_create_reports_insert_id() {
    let app = mock_app(MockDatabase::new(DatabaseBackend::MySql).append_exec_results(vec![
        MockExecResult {
            last_insert_id: 15,
            rows_affected: 1,
        },
    ]));

    let response = app
        .oneshot(with_json(
            "POST",
            "/",
            json!({ "nama_produk": "Laptop X", "merk_id": 1, "kategori_id": 2, "harga": "15000000" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "message": messages::CREATED, "insertedId": 15 }));
}

#[tokio::test]
async fn test_mysql_update_missing_row_is_not_found() {
    let app = mock_app(MockDatabase::new(DatabaseBackend::MySql).append_exec_results(vec![
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        },
    ]));

    let response = app
        .oneshot(with_json("PUT", "/9999", json!({ "nama_produk": "Nope" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["message"], messages::NOT_FOUND);
}

#[tokio::test]
async fn test_mysql_get_returns_row() {
    let row = BTreeMap::from([
        ("id", Value::from(3i32)),
        ("nama_produk", Value::from("Laptop X".to_string())),
        ("tahun_rilis", Value::from(Some(2024i32))),
        ("merk_id", Value::from(Some(1i32))),
        ("kategori_id", Value::from(Some(2i32))),
        ("harga", Value::from(None::<rust_decimal::Decimal>)),
        ("nama_merk", Value::from(Some("Asus".to_string()))),
        ("nama_kategori", Value::from(None::<String>)),
    ]);
    let app = mock_app(MockDatabase::new(DatabaseBackend::MySql).append_query_results(vec![vec![row]]));

    let response = app.oneshot(get("/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Json = json_body(response.into_body()).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["nama_merk"], "Asus");
    assert!(body["nama_kategori"].is_null());
    assert!(body["harga"].is_null());
}
