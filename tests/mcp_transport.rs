//! MCP server over an in-memory transport
//!
//! Speaks raw JSON-RPC to `StorybookServer` the way a client would. None of
//! these calls launch a browser.

use std::sync::Arc;

use kodegen_tools_storybook::{ChromeGateway, ChromeSessionProvider, StorybookServer};
use rmcp::ServiceExt;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, ReadHalf, WriteHalf};

mod common;
use common::{create_json_mock, fast_timeouts, test_config};

struct RawClient {
    reader: Lines<BufReader<ReadHalf<DuplexStream>>>,
    writer: WriteHalf<DuplexStream>,
    next_id: u64,
}

impl RawClient {
    async fn connect(storybook_url: &str) -> Self {
        let provider = ChromeSessionProvider::new(true, fast_timeouts());
        let gateway = ChromeGateway::new(test_config(storybook_url), provider).unwrap();
        let server = StorybookServer::new(Arc::new(gateway));

        let (client_io, server_io) = tokio::io::duplex(64 * 1024);
        tokio::spawn(async move {
            if let Ok(running) = server.serve(server_io).await {
                let _ = running.waiting().await;
            }
        });

        let (read, writer) = tokio::io::split(client_io);
        let mut client = Self {
            reader: BufReader::new(read).lines(),
            writer,
            next_id: 1,
        };

        let init = client
            .request(
                "initialize",
                json!({
                    "protocolVersion": "2025-03-26",
                    "capabilities": {},
                    "clientInfo": {"name": "transport-test", "version": "0.0.0"}
                }),
            )
            .await;
        assert!(init.get("result").is_some(), "initialize failed: {init}");
        client
            .send(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .await;
        client
    }

    async fn send(&mut self, message: Value) {
        let mut line = message.to_string();
        line.push('\n');
        self.writer.write_all(line.as_bytes()).await.unwrap();
        self.writer.flush().await.unwrap();
    }

    async fn request(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;
        self.send(json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params}))
            .await;

        loop {
            let line = self
                .reader
                .next_line()
                .await
                .unwrap()
                .expect("server closed the transport");
            let message: Value = serde_json::from_str(&line).unwrap();
            if message.get("id") == Some(&json!(id)) {
                return message;
            }
        }
    }

    /// `tools/call` and return its `result`, failing on a protocol error
    async fn call_tool(&mut self, params: Value) -> Value {
        let response = self.request("tools/call", params).await;
        assert!(
            response.get("error").is_none(),
            "expected a tool result, got protocol error: {response}"
        );
        response["result"].clone()
    }
}

fn text_of(result: &Value) -> &str {
    result["content"][0]["text"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_missing_url_is_a_tool_error() {
    let mut client = RawClient::connect("http://localhost:6006").await;

    let result = client
        .call_tool(json!({"name": "analyze_storybook_props", "arguments": {}}))
        .await;

    assert_eq!(result["isError"], json!(true));
    assert!(
        text_of(&result).starts_with("Prop analysis failed: Missing required argument 'url'"),
        "{result}"
    );
}

#[tokio::test]
async fn test_non_string_url_is_a_tool_error() {
    let mut client = RawClient::connect("http://localhost:6006").await;

    let result = client
        .call_tool(json!({"name": "extract_component_stories", "arguments": {"url": 42}}))
        .await;

    assert_eq!(result["isError"], json!(true));
    assert!(text_of(&result).starts_with("Story extraction failed: "), "{result}");
}

#[tokio::test]
async fn test_unknown_tool_is_a_tool_error() {
    let mut client = RawClient::connect("http://localhost:6006").await;

    let result = client
        .call_tool(json!({"name": "delete_everything"}))
        .await;

    assert_eq!(result["isError"], json!(true));
    assert!(text_of(&result).starts_with("Unknown tool 'delete_everything'"), "{result}");
}

#[tokio::test]
async fn test_tool_list_declares_url_as_required_string() {
    let mut client = RawClient::connect("http://localhost:6006").await;

    let response = client.request("tools/list", json!({})).await;
    let tools = response["result"]["tools"].as_array().unwrap();

    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names.len(), 3);
    for name in [
        "list_storybook_components",
        "analyze_storybook_props",
        "extract_component_stories",
    ] {
        assert!(names.contains(&name), "missing {name} in {names:?}");
    }

    let props = tools
        .iter()
        .find(|t| t["name"] == json!("analyze_storybook_props"))
        .unwrap();
    assert_eq!(props["inputSchema"]["required"], json!(["url"]));
    assert_eq!(props["inputSchema"]["properties"]["url"]["type"], json!("string"));
}

#[tokio::test]
async fn test_listing_succeeds_through_the_router() {
    let mut server = mockito::Server::new_async().await;
    let _index = create_json_mock(
        &mut server,
        "/index.json",
        &json!({
            "v": 5,
            "entries": {
                "card--basic": {"id": "card--basic", "title": "Card", "type": "story", "name": "Basic"}
            }
        }),
    );
    let mut client = RawClient::connect(&server.url()).await;

    let result = client
        .call_tool(json!({"name": "list_storybook_components", "arguments": {}}))
        .await;

    assert_ne!(result["isError"], json!(true));
    let payload: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(payload["components"][0]["name"], json!("Card"));
}
