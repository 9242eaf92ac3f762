//! 学生数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// 已持久化的学生记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub major: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 创建/更新请求体
///
/// 字段均为可选，缺失字段由校验报告为 400，而不是反序列化失败。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StudentInput {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "age is required"),
        range(min = 16, max = 100, message = "age must be between 16 and 100")
    )]
    pub age: Option<i32>,

    #[validate(
        required(message = "major is required"),
        length(min = 1, message = "major must not be empty")
    )]
    pub major: Option<String>,
}

/// 校验通过、去除首尾空白后的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub age: i32,
    pub major: String,
}

impl StudentInput {
    pub fn new(name: &str, age: i32, major: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            age: Some(age),
            major: Some(major.to_string()),
        }
    }

    /// 去除文本字段首尾空白
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.map(|s| s.trim().to_string()),
            age: self.age,
            major: self.major.map(|s| s.trim().to_string()),
        }
    }

    /// 校验并转换为可持久化的字段
    pub fn into_fields(self) -> Result<StudentFields, ValidationErrors> {
        let input = self.trimmed();
        input.validate()?;

        Ok(StudentFields {
            name: input.name.unwrap_or_default(),
            age: input.age.unwrap_or_default(),
            major: input.major.unwrap_or_default(),
        })
    }
}
