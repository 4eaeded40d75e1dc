pub mod captcha;

pub use captcha::*;
