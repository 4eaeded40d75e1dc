pub mod captcha;

pub use captcha::captcha_config;
