//! Macrocheck MCP Server Implementation
//!
//! Exposes label evaluation, liveness and status as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::nutrition::{LabelInput, Thresholds};
use crate::tools::evaluate;
use crate::tools::status::{self, StatusTracker};

/// Macrocheck MCP Service
#[derive(Clone)]
pub struct MacrocheckService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    thresholds: Thresholds,
    tool_router: ToolRouter<MacrocheckService>,
}

impl MacrocheckService {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(thresholds))),
            thresholds,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// Raw label values. Each may be a number, a numeric string, null or omitted;
/// anything that is not a number counts as 0.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct EvaluateMacrosParams {
    /// Serving size in grams
    pub serving_g: Option<Value>,
    /// Energy per serving in kcal
    pub calories: Option<Value>,
    /// Protein per serving in grams
    pub protein: Option<Value>,
    /// Total carbohydrate per serving in grams
    pub carbs: Option<Value>,
    /// Sugars per serving in grams
    pub sugars: Option<Value>,
    /// Fibre per serving in grams
    pub fibre: Option<Value>,
    /// Total fat per serving in grams
    pub fat: Option<Value>,
    /// Saturated fat per serving in grams
    pub satfat: Option<Value>,
    /// Sodium per serving (usually mg)
    pub sodium: Option<Value>,
}

impl From<EvaluateMacrosParams> for LabelInput {
    fn from(p: EvaluateMacrosParams) -> Self {
        LabelInput {
            serving_g: p.serving_g,
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            sugars: p.sugars,
            fibre: p.fibre,
            fat: p.fat,
            satfat: p.satfat,
            sodium: p.sodium,
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MacrocheckService {
    // --- Status ---

    #[tool(description = "Liveness check. Always returns {\"status\": \"ok\"} while the server is running.")]
    fn healthz(&self) -> Result<CallToolResult, McpError> {
        let json = to_json(&status::healthz())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get the current status of the macrocheck service including build info, uptime, memory, evaluations served and the rule thresholds in force")]
    async fn macrocheck_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let json = to_json(&tracker.get_status())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Evaluation ---

    #[tool(description = "Evaluate a food label. Takes serving_g, calories, protein, carbs, sugars, fibre, fat, satfat and sodium per serving and returns per-gram metrics, quality metrics, an energy density flag, a verdict (Good/Okay/Limit) with reasons and watchouts. Missing or non-numeric values count as 0.")]
    async fn evaluate_macros(&self, Parameters(p): Parameters<EvaluateMacrosParams>) -> Result<CallToolResult, McpError> {
        let report = evaluate::evaluate_label(&p.into(), &self.thresholds);
        self.status_tracker.lock().await.record_evaluation();
        tracing::info!(verdict = %report.verdict, "evaluate_macros served");
        let json = to_json(&report)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Evaluate a food label and return the report as a readable markdown document. Same inputs as evaluate_macros.")]
    async fn evaluate_macros_markdown(&self, Parameters(p): Parameters<EvaluateMacrosParams>) -> Result<CallToolResult, McpError> {
        let response = evaluate::evaluate_label_markdown(&p.into(), &self.thresholds);
        self.status_tracker.lock().await.record_evaluation();
        tracing::info!(verdict = %response.verdict, "evaluate_macros_markdown served");
        let json = to_json(&response)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacrocheckService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macrocheck".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Macrocheck".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Macrocheck - judges whether a packaged food is a good choice from its label. \
                 Pass the per-serving label values to evaluate_macros (JSON report) or \
                 evaluate_macros_markdown (readable report). \
                 Verdict is Good when protein density, sugar share of carbs and saturated fat share \
                 all pass, Okay when two pass, Limit otherwise. \
                 Service: healthz, macrocheck_status."
                    .into(),
            ),
        }
    }
}
