use actix_web::http::Method;
use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::error::AppError;
use crate::models::*;
use crate::services::CaptchaService;
use crate::utils::decode_body;

#[utoipa::path(
    post,
    path = "/api/send-captcha",
    tag = "captcha",
    request_body = SendCaptchaRequest,
    responses(
        (status = 200, description = "Captcha issued", body = CaptchaResponse),
        (status = 400, description = "Malformed body or invalid phone number"),
        (status = 429, description = "A captcha was issued for this phone too recently")
    )
)]
pub async fn send_captcha(
    captcha_service: web::Data<CaptchaService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: SendCaptchaRequest = match decode_body(&body) {
        Ok(request) => request,
        Err(e) => return Ok(e.error_response()),
    };

    match captcha_service.send_captcha(&request.phone).await {
        Ok(()) => Ok(HttpResponse::Ok().json(CaptchaResponse::ok("Captcha sent successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/verify-captcha",
    tag = "captcha",
    request_body = VerifyCaptchaRequest,
    responses(
        (status = 200, description = "Captcha verified", body = CaptchaResponse),
        (status = 400, description = "Malformed body, invalid phone, bad code length, not found, expired or wrong code")
    )
)]
pub async fn verify_captcha(
    captcha_service: web::Data<CaptchaService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: VerifyCaptchaRequest = match decode_body(&body) {
        Ok(request) => request,
        Err(e) => return Ok(e.error_response()),
    };

    match captcha_service
        .verify_captcha(&request.phone, &request.code)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(CaptchaResponse::ok("Captcha verified successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

// CORS 预检：响应头由中间件统一添加
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    AppError::MethodNotAllowed.error_response()
}

pub fn captcha_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/send-captcha")
            .route(web::post().to(send_captcha))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/verify-captcha")
            .route(web::post().to(verify_captcha))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}
