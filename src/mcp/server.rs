//! MCP server handler for the Storybook tools

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{
        router::tool::ToolRouter,
        tool::ToolCallContext,
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_router,
};
use tracing::debug;

use super::types::UrlArgs;
use crate::browser::ChromeSessionProvider;
use crate::gateway::{Gateway, Operation, ToolName, ToolOutcome};

/// Gateway backed by real Chrome sessions
pub type ChromeGateway = Gateway<ChromeSessionProvider>;

/// One handler instance per MCP connection; the gateway is shared
#[derive(Clone)]
pub struct StorybookServer {
    gateway: Arc<ChromeGateway>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StorybookServer {
    pub fn new(gateway: Arc<ChromeGateway>) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "list_storybook_components",
        description = "List all components in the Storybook with their available stories. \
                       Each entry carries the component name, whether it has a docs page, \
                       the URL to pass to the other tools and the names of its stories.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn list_storybook_components(&self) -> Result<CallToolResult, McpError> {
        Ok(into_result(
            self.gateway.execute(&Operation::ListComponents).await,
        ))
    }

    #[tool(
        name = "analyze_storybook_props",
        description = "Read the props table of a component's Storybook docs page. \
                       Returns the component name and one entry per prop with its \
                       description and default value.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn analyze_storybook_props(
        &self,
        Parameters(args): Parameters<UrlArgs>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_result(
            self.gateway
                .execute_url(ToolName::AnalyzeProps, args.url.as_ref())
                .await,
        ))
    }

    #[tool(
        name = "extract_component_stories",
        description = "Extract the source code of every story shown on a component's \
                       Storybook docs page. Collapsed code blocks are expanded first.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn extract_component_stories(
        &self,
        Parameters(args): Parameters<UrlArgs>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_result(
            self.gateway
                .execute_url(ToolName::ExtractStories, args.url.as_ref())
                .await,
        ))
    }
}

impl ServerHandler for StorybookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(instructions(self.gateway.config().storybook_url())),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tool_router.list_all()))
    }

    /// Published tools go through the router; any other name is answered by
    /// the gateway with an `isError` payload rather than a protocol error.
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if request.name.parse::<ToolName>().is_ok() {
            let tcc = ToolCallContext::new(self, request, context);
            return self.tool_router.call(tcc).await;
        }

        debug!("Tool '{}' is not routed, answering through the gateway", request.name);
        Ok(into_result(
            self.gateway
                .call(&request.name, request.arguments.as_ref())
                .await,
        ))
    }
}

fn into_result(outcome: ToolOutcome) -> CallToolResult {
    let content = vec![Content::text(outcome.text)];
    if outcome.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

fn instructions(storybook_url: &str) -> String {
    format!(
        "Tools for the Storybook at {storybook_url}. Start with list_storybook_components, \
         then pass a component's url to analyze_storybook_props for its props or to \
         extract_component_stories for the source of its stories."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcomes_are_flagged() {
        let result = into_result(ToolOutcome {
            text: "Listing failed: boom".into(),
            is_error: true,
        });
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn instructions_name_the_site() {
        assert!(instructions("http://localhost:6006").contains("http://localhost:6006"));
    }
}
