//! API 响应模型

use serde::{Deserialize, Serialize};

/// 失败响应
///
/// 所有失败统一返回 HTTP 500，错误信息原样透出给调用方
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误信息
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
