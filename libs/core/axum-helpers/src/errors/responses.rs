//! Reusable OpenAPI response types for the error bodies produced by [`AppError`](super::AppError).

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Malformed request body or query string",
    content_type = "application/json",
    example = json!({
        "code": 1003,
        "error": "JSON_EXTRACTION",
        "message": "Failed to deserialize the JSON body into the target type: purchased: invalid type: string \"yes\", expected a boolean"
    })
)]
pub struct BadRequestErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "connection refused"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
