use crate::error::{AppError, AppResult};
use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` rather than `\d`: the latter also matches non-ASCII digits
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("phone regex is valid"));

/// 校验中国大陆手机号格式 (11 位，1 开头，第二位 3-9)
pub fn validate_phone(phone: &str) -> AppResult<()> {
    if !PHONE_REGEX.is_match(phone) {
        return Err(AppError::InvalidPhone);
    }

    Ok(())
}

/// Keeps the first 3 and last 4 digits, e.g. `138****8000`.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 7 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 7))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("13800138000").is_ok());
        assert!(validate_phone("19912345678").is_ok());
        assert!(validate_phone("15000000000").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("1380013800").is_err());
        assert!(validate_phone("138001380000").is_err());
        assert!(validate_phone("12800138000").is_err());
        assert!(validate_phone("23800138000").is_err());
        assert!(validate_phone("+8613800138000").is_err());
        assert!(validate_phone("1380013800a").is_err());
        assert!(validate_phone(" 13800138000").is_err());
    }

    #[test]
    fn test_validate_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert!(validate_phone("13٨٠٠١٣٨٠٠٠").is_err());
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13800138000"), "138****8000");
        assert_eq!(mask_phone("1234567"), "*******");
        assert_eq!(mask_phone(""), "");
    }
}
