use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Version reported by every API example's root route.
pub const API_VERSION: &str = "1.0.0";

/// # Welcome Response
///
/// Static root payload of the API-style examples.
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Welcome to Express API",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, Clone, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
}

impl WelcomeResponse {
    /// Builds the welcome payload for the named framework.
    pub fn for_framework(framework: &str) -> Self {
        Self {
            message: format!("Welcome to {} API", framework),
            version: API_VERSION.to_string(),
        }
    }
}
