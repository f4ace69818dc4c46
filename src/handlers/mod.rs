pub mod admin_code;
pub mod ticket;

pub use admin_code::admin_code_config;
pub use ticket::ticket_config;

use crate::error::AppError;
use actix_web::web;

/// 请求体解析失败时也返回统一的错误结构
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 查询参数解析失败时也返回统一的错误结构
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
