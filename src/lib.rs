//! # 学生信息管理服务
//!
//! 基于 Axum 的学生记录 CRUD 服务，包括：
//! - REST API：列表、查询、创建、更新、删除
//! - 可替换的存储层：PostgreSQL (sqlx) 或内存存储
//! - 浏览器客户端静态资源托管 (public/)

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::students::model::{Student, StudentFields, StudentInput};
pub use infrastructure::config::Config;
pub use infrastructure::store::{MemoryStudentStore, StoreError, StudentStore};
pub use server::{build_router, run};
