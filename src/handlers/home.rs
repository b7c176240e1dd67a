//! Welcome endpoint handler.

use crate::models::WelcomeResponse;
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Welcome endpoint
///
/// Confirms the API is up and points at the OpenAPI document.
#[api_v2_operation(
    summary = "Welcome Endpoint",
    description = "Returns a welcome message, the location of the API documentation and the API version.",
    tags("General"),
    responses(
        (status = 200, description = "Successful response", body = WelcomeResponse)
    )
)]
pub async fn home() -> Result<web::Json<WelcomeResponse>, Error> {
    Ok(web::Json(WelcomeResponse {
        message: "Welcome to the Weather API".to_string(),
        docs: "/api/spec/v2".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
