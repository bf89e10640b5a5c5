use httpmock::prelude::*;
use serde_json::json;

use super::*;
use crate::config::HttpSettings;

fn client_for(server: &MockServer) -> WikipediaClient {
    WikipediaClient::with_base_url(
        &server.url("/api/rest_v1/page/summary"),
        &HttpSettings::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn returns_extract_on_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/rest_v1/page/summary/Paris");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "title": "Paris",
                    "extract": "Paris is the capital and largest city of France."
                }));
        })
        .await;

    let context = client_for(&server).summary("Paris").await;

    assert_eq!(context, "Paris is the capital and largest city of France.");
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_extract_yields_no_information_found() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/rest_v1/page/summary/Atlantis");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "title": "Atlantis" }));
        })
        .await;

    let context = client_for(&server).summary("Atlantis").await;
    assert_eq!(context, NO_INFORMATION_FOUND);
}

#[tokio::test]
async fn null_extract_yields_no_information_found() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/rest_v1/page/summary/Nowhere");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "extract": null }));
        })
        .await;

    let context = client_for(&server).summary("Nowhere").await;
    assert_eq!(context, NO_INFORMATION_FOUND);
}

#[tokio::test]
async fn non_success_status_yields_no_results_found() {
    let server = MockServer::start_async().await;
    for status in [404, 500] {
        let mut mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/rest_v1/page/summary/Gotham");
                then.status(status).body("not found");
            })
            .await;

        let context = client_for(&server).summary("Gotham").await;
        assert_eq!(context, NO_RESULTS_FOUND);
        mock.delete_async().await;
    }
}

#[tokio::test]
async fn transport_failure_yields_no_results_found() {
    let client =
        WikipediaClient::with_base_url("http://127.0.0.1:1/summary", &HttpSettings::default())
            .unwrap();
    assert_eq!(client.summary("Paris").await, NO_RESULTS_FOUND);
}

#[tokio::test]
async fn destination_is_encoded_as_single_segment() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/api/rest_v1/page/summary/New");
            then.status(200)
                .json_body(json!({ "extract": "The most populous city in the United States." }));
        })
        .await;

    let client = client_for(&server);
    let url = client.summary_url("New York City");
    assert!(url.as_str().ends_with("/summary/New%20York%20City"));

    let context = client.summary("New York City").await;
    assert_eq!(context, "The most populous city in the United States.");
    mock.assert_async().await;
}

#[tokio::test]
async fn repeated_lookups_are_not_cached() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/rest_v1/page/summary/Rome");
            then.status(200)
                .json_body(json!({ "extract": "Rome is the capital city of Italy." }));
        })
        .await;

    let client = client_for(&server);
    let first = client.fetch("Rome").await;
    let second = client.fetch("Rome").await;

    assert_eq!(first, second);
    mock.assert_hits_async(2).await;
}

#[test]
fn trailing_slash_in_base_url_is_tolerated() {
    let client = WikipediaClient::with_base_url(
        "https://en.wikipedia.org/api/rest_v1/page/summary/",
        &HttpSettings::default(),
    )
    .unwrap();
    assert_eq!(
        client.summary_url("Kyoto").as_str(),
        "https://en.wikipedia.org/api/rest_v1/page/summary/Kyoto"
    );
}
