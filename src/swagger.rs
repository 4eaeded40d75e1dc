use actix_web::{HttpResponse, web};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::captcha::send_captcha,
        handlers::captcha::verify_captcha,
    ),
    components(
        schemas(
            SendCaptchaRequest,
            VerifyCaptchaRequest,
            CaptchaResponse,
        )
    ),
    tags(
        (name = "captcha", description = "Phone captcha issue and verification")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json));
}
