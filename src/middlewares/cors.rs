use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// 所有响应（包括错误和 405）都带上固定的 CORS 头，允许任意来源
pub fn create_cors() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}
