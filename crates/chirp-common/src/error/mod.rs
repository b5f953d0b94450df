//! Application error types

mod app_error;

pub use app_error::{AppError, AppResult, ErrorResponse, GONE_MESSAGE, RETRY_MESSAGE};
