//! Extractors whose rejections render as [`AppError`](crate::errors::AppError).
//!
//! Plain `axum::Json` and `axum::extract::Query` answer malformed requests
//! with `text/plain` bodies and a mix of 400, 415 and 422. These wrappers
//! report every failure as a 400 [`ErrorResponse`](crate::errors::ErrorResponse).

pub mod json;
pub mod query;

pub use json::AppJson;
pub use query::AppQuery;
