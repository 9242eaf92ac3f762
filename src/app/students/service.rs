//! 学生业务服务

use std::sync::Arc;
use uuid::Uuid;

use super::model::{Student, StudentFields, StudentInput};
use crate::core::error::CoreError;
use crate::infrastructure::store::StudentStore;

const NOT_FOUND: &str = "Student not found";

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, CoreError> {
        self.store
            .list()
            .await
            .map_err(|e| CoreError::store("Error fetching students", e))
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, CoreError> {
        let id = parse_id(id)?;
        self.store
            .get(id)
            .await
            .map_err(|e| CoreError::store("Error fetching student", e))?
            .ok_or_else(not_found)
    }

    pub async fn create_student(&self, input: StudentInput) -> Result<Student, CoreError> {
        let fields = validate(input)?;
        self.store
            .insert(fields)
            .await
            .map_err(|e| CoreError::store("Error adding student", e))
    }

    /// 整体替换三个字段；先校验请求体，再查找记录
    pub async fn update_student(
        &self,
        id: &str,
        input: StudentInput,
    ) -> Result<Student, CoreError> {
        let fields = validate(input)?;
        let id = parse_id(id)?;
        self.store
            .update(id, fields)
            .await
            .map_err(|e| CoreError::store("Error updating student", e))?
            .ok_or_else(not_found)
    }

    pub async fn delete_student(&self, id: &str) -> Result<Student, CoreError> {
        let id = parse_id(id)?;
        self.store
            .delete(id)
            .await
            .map_err(|e| CoreError::store("Error deleting student", e))?
            .ok_or_else(not_found)
    }

    pub async fn ping(&self) -> Result<(), CoreError> {
        self.store
            .ping()
            .await
            .map_err(|e| CoreError::store("Store unavailable", e))
    }
}

// 无法解析的 id 与不存在的记录同样处理
fn parse_id(id: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(id).map_err(|_| not_found())
}

fn not_found() -> CoreError {
    CoreError::NotFound(NOT_FOUND.to_string())
}

fn validate(input: StudentInput) -> Result<StudentFields, CoreError> {
    Ok(input.into_fields()?)
}
