//! Lenient request body decoding.
//!
//! Rules:
//! - only the first JSON value in the body is read; trailing bytes are ignored
//! - a `null` body or a `null` field leaves the target at its default
//! - object keys match field names case-insensitively, the last match wins
//! - a non-object top-level value, or a wrong JSON type for a field, is an error

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Field names of the request types are lowercase, so keys are folded to lowercase.
pub fn decode_body<T>(body: &[u8]) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or(AppError::MalformedBody)?
        .map_err(|e| {
            log::debug!("Rejected request body: {e}");
            AppError::MalformedBody
        })?;

    let value = match first {
        Value::Null => return Ok(T::default()),
        // 依赖 preserve_order 保持键的原始顺序
        Value::Object(fields) => {
            let mut folded = Map::with_capacity(fields.len());
            for (key, field) in fields {
                if field.is_null() {
                    continue;
                }
                folded.insert(key.to_lowercase(), field);
            }
            Value::Object(folded)
        }
        // 数组、字符串等顶层值无法映射到请求结构体
        _ => return Err(AppError::MalformedBody),
    };

    serde_json::from_value(value).map_err(|e| {
        log::debug!("Rejected request body: {e}");
        AppError::MalformedBody
    })
}
