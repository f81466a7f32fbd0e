//! Pal Quest MCP Server
//!
//! A Model Context Protocol server (rmcp, stdio transport) that lets an LLM
//! play Pal Quest one button press at a time.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard};

use pal_quest::catalog::get_template;
use pal_quest::{Button, CreatureView, GameConfig, GameSession};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};

const NO_GAME: &str = "No game is running. Use 'new_game' to begin.";

#[derive(Debug, Clone)]
pub struct PalQuestService {
    tool_router: ToolRouter<PalQuestService>,
    session: Arc<Mutex<Option<GameSession>>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NewGameRequest {
    #[schemars(description = "Optional seed for a reproducible game")]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PressButtonRequest {
    #[schemars(description = "Button to press: 'up', 'down', 'left', 'right', 'a' or 'b'")]
    pub button: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupCreatureRequest {
    #[schemars(description = "Name of the Pal to look up")]
    pub name: String,
}

fn internal_error(message: String) -> McpError {
    McpError {
        code: ErrorCode(-32603),
        message: Cow::from(message),
        data: None,
    }
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl PalQuestService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            session: Arc::new(Mutex::new(None)),
        }
    }

    fn lock_session(&self) -> Result<MutexGuard<'_, Option<GameSession>>, McpError> {
        self.session
            .lock()
            .map_err(|e| internal_error(format!("Game state is unavailable: {}", e)))
    }

    #[tool(description = "Start a new game on the title screen")]
    async fn new_game(
        &self,
        Parameters(request): Parameters<NewGameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let config = GameConfig {
            seed: request.seed,
            ..GameConfig::default()
        };
        let session = GameSession::new(config)
            .map_err(|e| internal_error(format!("Error starting game: {}", e)))?;
        let text = session.view().to_string();
        *self.lock_session()? = Some(session);
        text_result(text)
    }

    #[tool(description = "Press a button and play out everything that follows it")]
    async fn press_button(
        &self,
        Parameters(request): Parameters<PressButtonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut guard = self.lock_session()?;
        let Some(session) = guard.as_mut() else {
            return text_result(NO_GAME.to_string());
        };

        let button = match request.button.parse::<Button>() {
            Ok(button) => button,
            Err(e) => return text_result(format!("Error: {}", e)),
        };

        session.handle_input(button);
        let mut events = session.take_events();
        session.settle();
        events.extend(session.take_events());

        let messages: Vec<String> = events.iter().filter_map(|event| event.format()).collect();

        let mut text = messages.join("\n");
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(&session.view().to_string());
        text_result(text)
    }

    #[tool(description = "Show the current game screen")]
    async fn get_state(&self) -> Result<CallToolResult, McpError> {
        let guard = self.lock_session()?;
        let text = match guard.as_ref() {
            Some(session) => session.view().to_string(),
            None => NO_GAME.to_string(),
        };
        text_result(text)
    }

    #[tool(description = "Look up a Pal species in the catalog")]
    async fn lookup_creature(
        &self,
        Parameters(request): Parameters<LookupCreatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = match get_template(&request.name) {
            Ok(template) => {
                let element = template
                    .element
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "none".to_string());
                let mut text = format!(
                    "{} ({}, element: {})\nHP: {}  Level: {}\nMoves: {}",
                    template.name,
                    template.type_label,
                    element,
                    template.max_hp,
                    template.level,
                    template.moves.join(", ")
                );
                if let Some(workability) = template.workability {
                    text.push_str(&format!("\nWorkability: {}", workability));
                }
                if let Some(skill) = &template.special_skill {
                    text.push_str(&format!("\nSpecial skill: {}", skill));
                }
                text
            }
            Err(e) => format!("Error: {}", e),
        };
        text_result(text)
    }

    #[tool(description = "List your team")]
    async fn get_team(&self) -> Result<CallToolResult, McpError> {
        let guard = self.lock_session()?;
        let text = match guard.as_ref() {
            Some(session) => session
                .roster()
                .members()
                .iter()
                .map(|member| CreatureView::from(member).to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            None => NO_GAME.to_string(),
        };
        text_result(text)
    }
}

#[tool_handler]
impl ServerHandler for PalQuestService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the protocol.
    env_logger::init();
    log::info!("Pal Quest MCP server starting");

    let service = PalQuestService::new();
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    let quit_reason = server.waiting().await?;
    log::info!("Pal Quest MCP server exiting: {:?}", quit_reason);
    Ok(())
}
