//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 删除确认响应，附带被删除的记录
#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted<T> {
    pub message: String,
    pub student: T,
}

impl<T> Deleted<T> {
    pub fn new(message: &str, student: T) -> Self {
        Self {
            message: message.to_string(),
            student,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub store: String,
    pub timestamp: String,
}

impl Health {
    pub fn healthy(store: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            store: store.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
