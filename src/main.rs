use student_records::infrastructure::logger::Logger;
use student_records::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    Logger::init("info");

    info!("Starting student records server...");

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    student_records::run(config).await
}
