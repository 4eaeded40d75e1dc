use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid request body")]
    MalformedBody,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Captcha must be 6 digits")]
    InvalidCodeShape,

    #[error("Too many requests, please try again later")]
    CooldownActive,

    #[error("Captcha not found")]
    NotFound,

    #[error("Captcha expired")]
    Expired,

    #[error("Invalid captcha")]
    Mismatch,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::CooldownActive => StatusCode::TOO_MANY_REQUESTS,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        match self {
            AppError::ConfigError(msg) => {
                log::error!("Config error: {msg}");
                return HttpResponse::build(status_code)
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal server error");
            }
            AppError::CooldownActive => log::info!("Captcha request rejected: {self}"),
            _ => log::warn!("Captcha request rejected: {self}"),
        }

        HttpResponse::build(status_code)
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
