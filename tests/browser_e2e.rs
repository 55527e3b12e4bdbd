//! End-to-end extraction with a real Chrome against a mock Storybook

use std::time::Duration;

use kodegen_tools_storybook::{
    ChromeSessionProvider, Gateway, Operation, ScrapeTimeouts, ServerConfig,
};
use serde_json::{Value, json};

mod common;
use common::create_html_mock;

const MANAGER_HTML: &str = r#"<!DOCTYPE html>
<html><body>
  <iframe id="storybook-preview-iframe" src="/iframe.html"></iframe>
</body></html>"#;

const PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html><body>
  <h1 class="sbdocs-title">Button</h1>
  <table class="docblock-argstable">
    <thead><tr><th>Name</th><th>Description</th><th>Default</th></tr></thead>
    <tbody>
      <tr><td>primary*</td><td>Principal call to action</td><td>false</td></tr>
      <tr><td>size</td><td>How large should the button be?</td><td>"medium"</td></tr>
    </tbody>
  </table>
  <div class="sb-anchor" id="anchor--example-button--primary">
    <div class="docblock-source"><pre>&lt;Button primary /&gt;</pre></div>
  </div>
  <div class="sb-anchor" id="anchor--example-button--large">
    <h3>Large</h3>
    <button class="docblock-code-toggle" onclick="document.getElementById('large-src').textContent = '<Button size=&quot;large&quot; />'">Show code</button>
    <pre id="large-src"></pre>
  </div>
</body></html>"#;

/// No `.sbdocs-title` and no `.docblock-argstable`; the args table lives in
/// an `.sb-argstableBlock` next to an unrelated plain table.
const ARGS_BLOCK_PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html><body>
  <h1>Badge</h1>
  <div class="sb-argstableBlock">
    <table>
      <tbody>
        <tr><td>variant</td><td>Color scheme</td><td>"neutral"</td></tr>
        <tr><td>label*</td><td>Text inside the badge</td><td>-</td></tr>
      </tbody>
    </table>
  </div>
  <table>
    <tbody><tr><td>1.2.0</td><td>Added outline variant</td><td>2024-01-01</td></tr></tbody>
  </table>
</body></html>"#;

/// Only a bare `<table>` and an `h1`
const PLAIN_TABLE_PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html><body>
  <h1>Chip</h1>
  <table>
    <thead><tr><th>Name</th><th>Description</th><th>Default</th></tr></thead>
    <tbody>
      <tr><td>onDelete</td><td>Called when the chip is removed</td><td>-</td></tr>
    </tbody>
  </table>
</body></html>"#;

/// One anchor with a bare `<code>`, one whose toggle button has no label
const CODE_FALLBACK_PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="sb-anchor" id="anchor--example-badge--inline">
    <code>&lt;Badge label="New" /&gt;</code>
  </div>
  <div class="sb-anchor" id="anchor--example-badge--with-icon">
    <h2>With Icon</h2>
    <button class="docblock-code-toggle" onclick="document.getElementById('icon-src').textContent = '<Badge icon=&quot;star&quot; />'"></button>
    <pre id="icon-src"></pre>
  </div>
</body></html>"#;

async fn gateway(server: &mockito::ServerGuard) -> Gateway<ChromeSessionProvider> {
    let timeouts = ScrapeTimeouts {
        prop_table: Duration::from_secs(1),
        code_settle: Duration::from_secs(1),
        ..ScrapeTimeouts::default()
    };
    let config = ServerConfig::builder()
        .storybook_url(server.url())
        .timeouts(timeouts)
        .build()
        .unwrap();
    let provider = ChromeSessionProvider::new(true, *config.timeouts());
    Gateway::new(config, provider).unwrap()
}

#[tokio::test]
#[ignore] // Requires browser installation
async fn test_props_from_real_page() {
    let mut server = mockito::Server::new_async().await;
    let _manager = create_html_mock(&mut server, "/", MANAGER_HTML);
    let _preview = create_html_mock(&mut server, "/iframe.html", PREVIEW_HTML);
    let gateway = gateway(&server).await;

    let outcome = gateway
        .execute(&Operation::AnalyzeProps {
            url: format!("{}/", server.url()),
        })
        .await;

    assert!(!outcome.is_error, "{}", outcome.text);
    let payload: Value = serde_json::from_str(&outcome.text).unwrap();
    assert_eq!(payload["component"], json!("Button"));
    assert_eq!(payload["props"][0]["name"], json!("primary"));
    assert_eq!(payload["props"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
#[ignore] // Requires browser installation
async fn test_stories_from_real_page() {
    let mut server = mockito::Server::new_async().await;
    let _manager = create_html_mock(&mut server, "/", MANAGER_HTML);
    let _preview = create_html_mock(&mut server, "/iframe.html", PREVIEW_HTML);
    let gateway = gateway(&server).await;

    let outcome = gateway
        .execute(&Operation::ExtractStories {
            url: format!("{}/", server.url()),
        })
        .await;

    assert!(!outcome.is_error, "{}", outcome.text);
    let payload: Value = serde_json::from_str(&outcome.text).unwrap();
    assert_eq!(
        payload,
        json!({
            "total": 2,
            "stories": [
                {"name": "Primary", "code": "<Button primary />"},
                {"name": "Large", "code": "<Button size=\"large\" />"}
            ]
        })
    );
}

async fn analyze(preview_html: &str) -> Value {
    let mut server = mockito::Server::new_async().await;
    let _manager = create_html_mock(&mut server, "/", MANAGER_HTML);
    let _preview = create_html_mock(&mut server, "/iframe.html", preview_html);
    let gateway = gateway(&server).await;

    let outcome = gateway
        .execute(&Operation::AnalyzeProps {
            url: format!("{}/", server.url()),
        })
        .await;

    assert!(!outcome.is_error, "{}", outcome.text);
    serde_json::from_str(&outcome.text).unwrap()
}

#[tokio::test]
#[ignore] // Requires browser installation
async fn test_props_from_args_block_and_heading() {
    let payload = analyze(ARGS_BLOCK_PREVIEW_HTML).await;

    assert_eq!(
        payload,
        json!({
            "component": "Badge",
            "props": [
                {"name": "variant", "description": "Color scheme", "defaultValue": "\"neutral\""},
                {"name": "label", "description": "Text inside the badge", "defaultValue": "-"}
            ]
        })
    );
}

#[tokio::test]
#[ignore] // Requires browser installation
async fn test_props_from_bare_table() {
    let payload = analyze(PLAIN_TABLE_PREVIEW_HTML).await;

    assert_eq!(
        payload,
        json!({
            "component": "Chip",
            "props": [
                {"name": "onDelete", "description": "Called when the chip is removed", "defaultValue": "-"}
            ]
        })
    );
}

#[tokio::test]
#[ignore] // Requires browser installation
async fn test_stories_from_bare_code_and_unlabeled_toggle() {
    let mut server = mockito::Server::new_async().await;
    let _manager = create_html_mock(&mut server, "/", MANAGER_HTML);
    let _preview = create_html_mock(&mut server, "/iframe.html", CODE_FALLBACK_PREVIEW_HTML);
    let gateway = gateway(&server).await;

    let outcome = gateway
        .execute(&Operation::ExtractStories {
            url: format!("{}/", server.url()),
        })
        .await;

    assert!(!outcome.is_error, "{}", outcome.text);
    let payload: Value = serde_json::from_str(&outcome.text).unwrap();
    assert_eq!(
        payload,
        json!({
            "total": 2,
            "stories": [
                {"name": "Inline", "code": "<Badge label=\"New\" />"},
                {"name": "With Icon", "code": "<Badge icon=\"star\" />"}
            ]
        })
    );
}
