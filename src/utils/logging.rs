/// 日志工具模块
///
/// 提供日志初始化和输出格式化的辅助函数
use tracing::info;
use tracing_subscriber::{fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::models::{BatchSummary, ProfileRecord};

/// 初始化全局日志订阅者
///
/// 日志级别通过 RUST_LOG 环境变量控制，默认 info
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(layer().with_target(false))
        .init();
}

/// 展示指纹配置列表（最多前 10 个）
pub fn display_profiles(profiles: &[ProfileRecord]) {
    if profiles.is_empty() {
        return;
    }

    info!("\n📋 可用的指纹配置:");
    for (index, profile) in profiles.iter().take(10).enumerate() {
        info!("  {}. {}", index + 1, profile);
    }

    if profiles.len() > 10 {
        info!("  ... 还有 {} 个指纹配置", profiles.len() - 10);
    }
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &BatchSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 批量运行统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}", summary.success);
    info!("❌ 失败: {}", summary.failed);
    info!("📈 总计: {}", summary.total);
    info!("{}", "=".repeat(60));
}
