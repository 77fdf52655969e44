//! Direct client operations against a mocked upstream service

use assistants_client::{AssistantsApi, AssistantsClient, ClientError, Config, ListMessagesQuery, SortOrder};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> Config {
    Config {
        assistant_id: "asst_test".to_string(),
        api_key: "test-key".to_string(),
        base_url: server.uri(),
        ..Config::default()
    }
}

#[tokio::test]
async fn retrieves_an_assistant() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assistants/asst_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "asst_test",
            "object": "assistant",
            "created_at": 1690000000,
            "name": "Support bot",
            "model": "gpt-4o",
            "instructions": "Answer politely."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AssistantsClient::new(&test_config(&server)).unwrap();
    let assistant = client.retrieve_assistant("asst_test").await.unwrap();

    assert_eq!(assistant.id, "asst_test");
    assert_eq!(assistant.name.as_deref(), Some("Support bot"));
    assert_eq!(assistant.model, "gpt-4o");
}

#[tokio::test]
async fn deletes_a_thread() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/threads/thread_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "thread_1",
            "object": "thread.deleted",
            "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AssistantsClient::new(&test_config(&server)).unwrap();
    let deleted = client.delete_thread("thread_1").await.unwrap();

    assert_eq!(deleted.id, "thread_1");
    assert!(deleted.deleted);
}

#[tokio::test]
async fn forwards_every_pagination_knob() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/threads/thread_1/messages"))
        .and(query_param("limit", "25"))
        .and(query_param("order", "desc"))
        .and(query_param("after", "msg_a"))
        .and(query_param("before", "msg_b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [],
            "first_id": null,
            "last_id": null,
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AssistantsClient::new(&test_config(&server)).unwrap();
    let query = ListMessagesQuery {
        limit: Some(25),
        order: Some(SortOrder::Desc),
        after: Some("msg_a".to_string()),
        before: Some("msg_b".to_string()),
    };
    let page = client.list_messages("thread_1", &query).await.unwrap();

    assert!(page.data.is_empty());
    assert!(!page.has_more);
}

#[tokio::test]
async fn sends_the_organization_header_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assistants/asst_test"))
        .and(header("OpenAI-Organization", "org_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "asst_test",
            "object": "assistant",
            "created_at": 1690000000,
            "model": "gpt-4o"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        org_id: Some("org_42".to_string()),
        ..test_config(&server)
    };
    let client = AssistantsClient::new(&config).unwrap();
    client.retrieve_assistant("asst_test").await.unwrap();
}

#[tokio::test]
async fn non_json_error_bodies_come_back_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assistants/asst_test"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = AssistantsClient::new(&test_config(&server)).unwrap();
    let err = client.retrieve_assistant("asst_test").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}
