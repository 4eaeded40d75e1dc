pub mod clock;
pub mod code_generator;
pub mod json_body;
pub mod phone;

pub use clock::{Clock, ManualClock, SystemClock};
pub use code_generator::{CODE_LENGTH, generate_captcha_code};
pub use json_body::decode_body;
pub use phone::*;
