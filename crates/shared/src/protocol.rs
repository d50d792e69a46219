use serde::{Deserialize, Serialize};

use crate::domain::{Affordance, HighlightVector, NavEvent, PageId};

/// Body of `POST /api/navigate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    #[serde(flatten)]
    pub event: NavEvent,
}

/// The outputs of one navigation step: page content, one style table per
/// navigation item, and the stored page id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub page: PageId,
    pub highlight: HighlightVector,
    pub nav_styles: Vec<serde_json::Value>,
    pub content: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResponse {
    pub page: PageId,
    pub highlight: HighlightVector,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    pub page: PageId,
    pub element_id: String,
    pub label: String,
    pub position: usize,
}

impl From<Affordance> for PageSummary {
    fn from(value: Affordance) -> Self {
        Self {
            page: value.page(),
            element_id: value.element_id().to_string(),
            label: value.label().to_string(),
            position: value.position(),
        }
    }
}
