mod test_utils;

use rmcp::model::{CallToolRequestParam, ProtocolVersion};
use rmcp::service::{RoleClient, RunningService};
use rmcp::{ServerHandler, ServiceExt};
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::{MockPlatform, context_with};
use x_mcp::XMcpServer;

fn server() -> XMcpServer {
    let (context, _store) = context_with(Arc::new(MockPlatform::new()));
    XMcpServer::new(context)
}

/// Run the server on one end of an in-memory pipe and connect a client to the other.
async fn connect() -> RunningService<RoleClient, ()> {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    let server = server();
    tokio::spawn(async move {
        if let Ok(running) = server.serve(server_io).await {
            let _ = running.waiting().await;
        }
    });
    ().serve(client_io).await.unwrap()
}

fn request(name: &'static str, arguments: Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.into(),
        arguments: arguments.as_object().cloned(),
    }
}

/// The call result as it appears on the wire.
async fn call(client: &RunningService<RoleClient, ()>, name: &'static str, arguments: Value) -> Value {
    let result = client.call_tool(request(name, arguments)).await.unwrap();
    serde_json::to_value(result).unwrap()
}

fn body(result: &Value) -> Value {
    serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
}

#[test]
fn test_server_info_advertises_tools() {
    let info = server().get_info();
    assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
    assert_eq!(info.server_info.name, "x_mcp");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
}

#[tokio::test]
async fn test_lists_the_four_draft_tools() {
    let client = connect().await;
    let mut names: Vec<String> = client
        .list_all_tools()
        .await
        .unwrap()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["create_draft", "delete_draft", "list_drafts", "publish_draft"]
    );
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_tool_calls_round_trip() {
    let client = connect().await;

    let created = call(&client, "create_draft", json!({"content": "from the wire"})).await;
    assert_ne!(created["isError"], true);
    let draft = body(&created);
    assert_eq!(draft["segments"][0]["text"], "from the wire");

    let listed = body(&call(&client, "list_drafts", json!({})).await);
    assert_eq!(listed["count"], 1);

    let published = call(&client, "publish_draft", json!({"draft_id": draft["draft_id"]})).await;
    assert_eq!(body(&published)["tweet_ids"], json!(["1001"]));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_domain_failures_are_error_results() {
    let client = connect().await;

    let failed = call(&client, "delete_draft", json!({"draft_id": "draft-missing"})).await;
    assert_eq!(failed["isError"], true);
    let report = body(&failed);
    assert_eq!(report["error"]["kind"], "not_found");
    assert!(
        report["error"]["message"]
            .as_str()
            .unwrap()
            .contains("draft-missing")
    );

    let invalid = call(&client, "create_draft", json!({"content": "   "})).await;
    assert_eq!(invalid["isError"], true);
    assert_eq!(body(&invalid)["error"]["kind"], "validation");

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_malformed_arguments_are_protocol_errors() {
    let client = connect().await;

    let cases = vec![
        request("create_draft", json!({"content": 42})),
        request("publish_draft", json!({})),
        request("schedule_tweet", json!({})),
    ];
    for case in cases {
        let name = case.name.to_string();
        assert!(client.call_tool(case).await.is_err(), "tool: {}", name);
    }

    // The session stays usable afterwards.
    let listed = body(&call(&client, "list_drafts", json!({})).await);
    assert_eq!(listed["count"], 0);

    client.cancel().await.unwrap();
}
