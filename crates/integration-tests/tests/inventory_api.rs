//! Inventory and catalog listing tests.

#![allow(clippy::unwrap_used)]

use shoplytix_integration_tests::TestClient;

#[tokio::test]
async fn health_is_ok() {
    let mut client = TestClient::new();
    let (status, body) = client.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn list_returns_whole_demo_catalog() {
    let mut client = TestClient::new();

    let (status, body) = client.get("/api/inventory").await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 8);

    let products = body["products"].as_array().unwrap();
    let cola = products
        .iter()
        .find(|p| p["prod_code"] == "bev001")
        .unwrap();
    assert_eq!(cola["name"], "Cola 1.5L Bottle");
    assert_eq!(cola["price_display"], "₱65.00");
    assert_eq!(cola["stock"], 45);
    assert_eq!(cola["stock_status"], "in_stock");
    assert_eq!(cola["stock_label"], "In Stock");
}

#[tokio::test]
async fn stock_classification_is_exposed_per_product() {
    let mut client = TestClient::new();

    let (_, body) = client.get("/api/inventory").await;
    let products = body["products"].as_array().unwrap();

    let nuggets = products
        .iter()
        .find(|p| p["prod_code"] == "frz001")
        .unwrap();
    assert_eq!(nuggets["stock"], 3);
    assert_eq!(nuggets["stock_label"], "Low Stock");

    let juice = products
        .iter()
        .find(|p| p["prod_code"] == "bev002")
        .unwrap();
    assert_eq!(juice["stock"], 0);
    assert_eq!(juice["stock_label"], "Out of Stock");
}

#[tokio::test]
async fn category_filter_narrows_results() {
    let mut client = TestClient::new();

    let (status, body) = client.get("/api/inventory?category=cat1").await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 2);
    for product in body["products"].as_array().unwrap() {
        assert_eq!(product["category_id"], "cat1");
    }
}

#[tokio::test]
async fn search_matches_name_case_insensitively() {
    let mut client = TestClient::new();

    let (_, body) = client.get("/api/inventory?search=COLA").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["prod_code"], "bev001");
}

#[tokio::test]
async fn search_ignores_surrounding_whitespace() {
    let mut client = TestClient::new();

    let (_, body) = client.get("/api/inventory?search=%20cola%20").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["prod_code"], "bev001");
}

#[tokio::test]
async fn search_matches_barcode() {
    let mut client = TestClient::new();

    let (_, body) = client.get("/api/inventory?search=8884567890").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["prod_code"], "met001");
}

#[tokio::test]
async fn category_and_search_combine() {
    let mut client = TestClient::new();

    let (_, body) = client.get("/api/inventory?category=cat2&search=beef").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["prod_code"], "can002");
}

#[tokio::test]
async fn empty_filter_params_mean_no_filter() {
    let mut client = TestClient::new();

    // The client sends empty strings when "All" is selected
    let (_, body) = client.get("/api/inventory?category=&search=").await;
    assert_eq!(body["total"], 8);
}

#[tokio::test]
async fn categories_and_units_are_listed() {
    let mut client = TestClient::new();

    let (status, body) = client.get("/api/categories").await;
    assert_eq!(status, 200);
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["id"], "cat1");
    assert_eq!(categories[0]["label"], "Beverages");

    let (status, body) = client.get("/api/units").await;
    assert_eq!(status, 200);
    assert_eq!(body["units"].as_array().unwrap().len(), 3);
}
