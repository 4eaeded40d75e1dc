pub mod captcha_service;

pub use captcha_service::*;
