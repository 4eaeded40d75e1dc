use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An issued code and the instant it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

// 字段缺失或为 null 时按空字符串处理，交由后续校验拒绝
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SendCaptchaRequest {
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct VerifyCaptchaRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CaptchaResponse {
    pub code: i32,
    pub msg: String,
}

impl CaptchaResponse {
    pub fn ok(msg: &str) -> Self {
        Self {
            code: 0,
            msg: msg.to_string(),
        }
    }
}
