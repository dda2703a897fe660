mod common;

use chrono::DateTime;
use common::TestApp;
use mongodb::bson::{doc, oid::ObjectId};
use reqwest::Client;
use serde_json::json;

async fn insert_user(app: &TestApp, client: &Client, body: &serde_json::Value) -> String {
    let response = client
        .post(format!("{}/user", app.address))
        .json(body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(201, response.status().as_u16());

    let ack: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    ack["insertedId"]
        .as_str()
        .expect("insertedId missing from acknowledgment")
        .to_string()
}

#[tokio::test]
async fn create_and_list_users() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let id = insert_user(
        &app,
        &client,
        &json!({
            "email": "ada@example.com",
            "displayName": "Ada",
            "plan": "free"
        }),
    )
    .await;

    let list: serde_json::Value = client
        .get(format!("{}/user", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let users = list.as_array().expect("Expected an array");
    let ada = users
        .iter()
        .find(|u| u["id"] == id.as_str())
        .expect("Inserted user missing from listing");

    assert_eq!(ada["email"], "ada@example.com");
    // Arbitrary extra fields are stored and listed as submitted
    assert_eq!(ada["displayName"], "Ada");
    assert_eq!(ada["plan"], "free");

    app.cleanup().await;
}

#[tokio::test]
async fn patch_updates_only_last_login() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    insert_user(
        &app,
        &client,
        &json!({
            "email": "grace@example.com",
            "displayName": "Grace"
        }),
    )
    .await;

    let logged_at = "2026-08-04T10:00:00Z";
    let response = client
        .patch(format!("{}/user", app.address))
        .json(&json!({ "email": "grace@example.com", "lastLoggedAt": logged_at }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let ack: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(ack["matchedCount"], 1);
    assert_eq!(ack["modifiedCount"], 1);

    // Only lastLoggedAt changed; the other fields are untouched
    let stored = app
        .raw_collection("user")
        .find_one(doc! { "email": "grace@example.com" }, None)
        .await
        .expect("Failed to query collection")
        .expect("User not found in DB");

    assert_eq!(stored.get_str("displayName").unwrap(), "Grace");

    let expected_millis = DateTime::parse_from_rfc3339(logged_at)
        .unwrap()
        .timestamp_millis();
    assert_eq!(
        stored.get_datetime("lastLoggedAt").unwrap().timestamp_millis(),
        expected_millis
    );

    app.cleanup().await;
}

#[tokio::test]
async fn patch_unknown_email_is_zero_effect() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/user", app.address))
        .json(&json!({
            "email": "nobody@example.com",
            "lastLoggedAt": "2026-08-04T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // No match is an ordinary outcome, reported through the counts
    assert!(response.status().is_success());
    let ack: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(ack["matchedCount"], 0);
    assert_eq!(ack["modifiedCount"], 0);
    assert!(ack["upsertedId"].is_null());

    app.cleanup().await;
}

#[tokio::test]
async fn delete_user_by_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let id = insert_user(&app, &client, &json!({ "email": "gone@example.com" })).await;

    let response = client
        .delete(format!("{}/user/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let ack: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(ack["deletedCount"], 1);

    let oid = ObjectId::parse_str(&id).expect("Invalid id in acknowledgment");
    let remaining = app
        .raw_collection("user")
        .find_one(doc! { "_id": oid }, None)
        .await
        .expect("Failed to query collection");
    assert!(remaining.is_none());

    app.cleanup().await;
}

#[tokio::test]
async fn create_user_rejects_invalid_email() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/user", app.address))
        .json(&json!({ "email": "not-an-email" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(422, response.status().as_u16());

    app.cleanup().await;
}
