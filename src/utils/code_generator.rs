use rand::Rng;

pub const CODE_LENGTH: usize = 6;

/// 生成6位数字验证码，范围 [100000, 999999]，不会以 0 开头
pub fn generate_captcha_code() -> String {
    generate_captcha_code_with(&mut rand::thread_rng())
}

pub fn generate_captcha_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(100_000u32..=999_999).to_string()
}
