//! SmartPlate MCP Server Implementation
//!
//! Exposes the meal analysis and dish lookup tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::models::{BoundingBox, Detection};
use crate::nutrition::SharedTable;
use crate::tools::analysis;
use crate::tools::dishes;
use crate::tools::status::StatusTracker;

/// SmartPlate MCP Service
#[derive(Clone)]
pub struct SmartPlateService {
    status_tracker: Arc<StatusTracker>,
    table: Arc<SharedTable>,
    tool_router: ToolRouter<SmartPlateService>,
}

impl SmartPlateService {
    pub fn new(table: Arc<SharedTable>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(Arc::clone(&table))),
            table,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BoundingBoxParams {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DetectionParams {
    /// Class label from the detector (e.g. "idli", "pizza")
    pub label: String,
    /// Detector confidence (default 1.0). Not used for filtering.
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    /// Detector class index
    pub class_id: Option<u32>,
    /// Bounding box in pixel coordinates
    pub bounding_box: Option<BoundingBoxParams>,
}

fn default_confidence() -> f32 { 1.0 }

impl From<DetectionParams> for Detection {
    fn from(p: DetectionParams) -> Self {
        Detection {
            label: p.label,
            confidence: p.confidence,
            class_id: p.class_id,
            bounding_box: p.bounding_box.map(|b| BoundingBox { x1: b.x1, y1: b.y1, x2: b.x2, y2: b.y2 }),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeDetectionsParams {
    /// Every detection from one image, in detector order
    pub detections: Vec<DetectionParams>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupDishParams {
    /// Detector label to resolve
    pub label: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl SmartPlateService {
    #[tool(description = "Get the current status of the SmartPlate service including build info, nutrition table status, and process information")]
    fn smartplate_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for analyzing a meal photo. Call this before the first analysis or when unsure how labels are matched.")]
    fn analysis_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ANALYSIS_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ANALYSIS_INSTRUCTIONS)]))
    }

    #[tool(description = "Match the detections from one food photo against the Indian dish nutrition table. Returns matched items, unmatched labels, and total calories.")]
    fn analyze_detections(&self, Parameters(p): Parameters<AnalyzeDetectionsParams>) -> Result<CallToolResult, McpError> {
        let detections: Vec<Detection> = p.detections.into_iter().map(Detection::from).collect();
        let result = analysis::analyze_detections(self.table.get(), &detections);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Resolve a single detector label to a dish in the nutrition table, reporting which casing variant matched")]
    fn lookup_dish(&self, Parameters(p): Parameters<LookupDishParams>) -> Result<CallToolResult, McpError> {
        let result = dishes::lookup_dish(self.table.get(), &p.label)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for SmartPlateService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "smartplate".into(),
                version: crate::tools::status::VERSION.into(),
                title: Some("SmartPlate: Indian Food Nutrition".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "SmartPlate - nutrition lookup for food detected in photos. \
                 Call analysis_instructions first. \
                 Analysis: analyze_detections (all detections from one image). \
                 Lookup: lookup_dish (one label). \
                 Status: smartplate_status (table availability, build info)."
                    .into(),
            ),
        }
    }
}
