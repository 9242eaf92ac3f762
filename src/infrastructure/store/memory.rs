//! 内存存储

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StudentStore};
use crate::app::students::model::{Student, StudentFields};

/// 进程内学生存储，按插入顺序保存记录
#[derive(Default)]
pub struct MemoryStudentStore {
    students: RwLock<Vec<Student>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let students = self.students.read().await;
        Ok(students.iter().rev().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Student>, StoreError> {
        let students = self.students.read().await;
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, fields: StudentFields) -> Result<Student, StoreError> {
        let now = Utc::now();
        let student = Student {
            id: Uuid::new_v4(),
            name: fields.name,
            age: fields.age,
            major: fields.major,
            created_at: now,
            updated_at: now,
        };

        self.students.write().await.push(student.clone());
        Ok(student)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: StudentFields,
    ) -> Result<Option<Student>, StoreError> {
        let mut students = self.students.write().await;
        let Some(student) = students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        student.name = fields.name;
        student.age = fields.age;
        student.major = fields.major;
        student.updated_at = Utc::now();

        Ok(Some(student.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Student>, StoreError> {
        let mut students = self.students.write().await;
        let index = students.iter().position(|s| s.id == id);
        Ok(index.map(|index| students.remove(index)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, age: i32, major: &str) -> StudentFields {
        StudentFields {
            name: name.to_string(),
            age,
            major: major.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStudentStore::new();
        let first = store.insert(fields("Ana", 20, "CS")).await.unwrap();
        let second = store.insert(fields("Bo", 22, "Math")).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_created_at() {
        let store = MemoryStudentStore::new();
        let created = store.insert(fields("Ana", 20, "CS")).await.unwrap();

        let updated = store
            .update(created.id, fields("Ana Maria", 21, "Physics"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.age, 21);
        assert_eq!(updated.major, "Physics");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_missing_ids_return_none() {
        let store = MemoryStudentStore::new();
        let id = Uuid::new_v4();

        assert!(store.get(id).await.unwrap().is_none());
        assert!(store.update(id, fields("X", 30, "Y")).await.unwrap().is_none());
        assert!(store.delete(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryStudentStore::new();
        let created = store.insert(fields("Ana", 20, "CS")).await.unwrap();

        let deleted = store.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted, created);
        assert!(store.get(created.id).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }
}
