//! 日志基础设施

use tracing_subscriber::{fmt, EnvFilter};

pub struct Logger;

impl Logger {
    /// 按 `RUST_LOG` 初始化日志，未设置时使用 `default_filter`
    pub fn init(default_filter: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // 重复初始化（例如测试中）时忽略错误
        let _ = fmt().with_env_filter(filter).with_target(false).try_init();
    }
}
