use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidTransitionEvent,
    NotFound,
    RenderFailure,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("navigation event '{trigger}' does not match any navigation item")]
    InvalidTransitionEvent { trigger: String },
    #[error("unknown page '{0}'")]
    UnknownPage(String),
    #[error("failed to render {page} page: {reason}")]
    RenderFailure { page: PageId, reason: String },
}

impl DashboardError {
    pub fn render(page: PageId, reason: impl Into<String>) -> Self {
        Self::RenderFailure {
            page,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DashboardError::InvalidTransitionEvent { .. } => ErrorCode::InvalidTransitionEvent,
            DashboardError::UnknownPage(_) => ErrorCode::NotFound,
            DashboardError::RenderFailure { .. } => ErrorCode::RenderFailure,
        }
    }
}

impl From<&DashboardError> for ApiError {
    fn from(value: &DashboardError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

impl From<DashboardError> for ApiError {
    fn from(value: DashboardError) -> Self {
        Self::from(&value)
    }
}
