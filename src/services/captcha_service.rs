use chrono::{Duration, Local};
use std::sync::Arc;

use crate::config::CaptchaConfig;
use crate::error::{AppError, AppResult};
use crate::models::CodeEntry;
use crate::store::CodeStore;
use crate::utils::*;

#[derive(Clone)]
pub struct CaptchaService {
    store: Arc<dyn CodeStore>,
    clock: Arc<dyn Clock>,
    code_ttl: Duration,
    resend_grace: Duration,
    log_plaintext_codes: bool,
}

impl CaptchaService {
    pub fn new(config: &CaptchaConfig, store: Arc<dyn CodeStore>, clock: Arc<dyn Clock>) -> Self {
        if config.log_plaintext_codes {
            log::warn!("Plaintext captcha logging is enabled; do not use this in production");
        }

        Self {
            store,
            clock,
            // 超出 chrono 范围的配置按最大值处理，在 send_captcha 中报错而非 panic
            code_ttl: Duration::try_seconds(config.code_ttl_secs).unwrap_or(Duration::MAX),
            resend_grace: Duration::try_seconds(config.resend_grace_secs).unwrap_or(Duration::MAX),
            log_plaintext_codes: config.log_plaintext_codes,
        }
    }

    pub async fn send_captcha(&self, phone: &str) -> AppResult<()> {
        let phone = phone.trim();
        validate_phone(phone)?;

        // 冷却期检查：沿用过期时间判断，expires_at > now - grace 时拒绝
        let now = self.clock.now();
        if let Some(existing) = self.store.get(phone).await {
            let cooling = match now.checked_sub_signed(self.resend_grace) {
                Some(threshold) => existing.expires_at > threshold,
                None => true,
            };
            if cooling {
                return Err(AppError::CooldownActive);
            }
        }

        let expires_at = now.checked_add_signed(self.code_ttl).ok_or_else(|| {
            AppError::ConfigError("captcha.code_ttl_secs is out of range".to_string())
        })?;
        let code = generate_captcha_code();
        let expires_display = expires_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        self.store
            .set(
                phone,
                CodeEntry {
                    code: code.clone(),
                    expires_at,
                },
            )
            .await;

        if self.log_plaintext_codes {
            log::info!("Captcha issued: code={code} phone={phone} expires_at={expires_display}");
        } else {
            log::info!(
                "Captcha issued: phone={} expires_at={expires_display}",
                mask_phone(phone)
            );
        }

        Ok(())
    }

    pub async fn verify_captcha(&self, phone: &str, code: &str) -> AppResult<()> {
        let phone = phone.trim();
        let code = code.trim();

        validate_phone(phone)?;

        // 只校验长度，不校验是否全为数字
        if code.chars().count() != CODE_LENGTH {
            return Err(AppError::InvalidCodeShape);
        }

        let entry = self.store.get(phone).await.ok_or(AppError::NotFound)?;

        if self.clock.now() > entry.expires_at {
            self.store.delete(phone).await;
            return Err(AppError::Expired);
        }

        // 错误不清除，过期前可继续尝试
        if entry.code != code {
            return Err(AppError::Mismatch);
        }

        self.store.delete(phone).await;
        log::info!("Captcha verified: phone={}", mask_phone(phone));

        Ok(())
    }
}
