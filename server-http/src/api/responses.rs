use crate::operation::AVAILABLE_METHODS;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
}

// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 200 index body returned when no `method` parameter is present
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableMethodsResponse {
    pub message: &'static str,
    pub available_methods: [&'static str; 4],
}

impl AvailableMethodsResponse {
    pub fn new() -> Self {
        Self {
            message: "Available methods:",
            available_methods: AVAILABLE_METHODS,
        }
    }
}

impl Default for AvailableMethodsResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// 400 body for verbs outside the dispatch table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidHttpMethodResponse {
    pub error: &'static str,
    pub available_methods: [&'static str; 4],
}

impl InvalidHttpMethodResponse {
    pub fn new() -> Self {
        Self {
            error: "Invalid HTTP method.",
            available_methods: AVAILABLE_METHODS,
        }
    }
}

impl Default for InvalidHttpMethodResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation returned by a successful delete
#[derive(Debug, Serialize)]
pub struct TicketDeletedResponse {
    pub message: &'static str,
}

impl TicketDeletedResponse {
    pub fn new() -> Self {
        Self {
            message: "Ticket successfully deleted.",
        }
    }
}

impl Default for TicketDeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
