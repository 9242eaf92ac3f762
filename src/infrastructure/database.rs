//! 数据库基础设施

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// 创建 students 表（幂等）
    ///
    /// `seq` 只用于同一时间戳内的稳定排序，不对外暴露。
    pub async fn migrate(&self) -> Result<(), Error> {
        info!("Creating database tables...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id UUID PRIMARY KEY,
                seq BIGSERIAL NOT NULL,
                name TEXT NOT NULL CHECK (name <> ''),
                age INTEGER NOT NULL CHECK (age BETWEEN 16 AND 100),
                major TEXT NOT NULL CHECK (major <> ''),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS students_created_at_idx ON students (created_at DESC, seq DESC)",
        )
        .execute(&self.pool)
        .await?;

        info!("Database tables created successfully");
        Ok(())
    }
}
