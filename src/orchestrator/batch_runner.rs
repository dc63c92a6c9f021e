//! 批量运行器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量运行指纹配置和汇总结果。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、构建目录客户端和自动化能力
//! 2. **模式分发**：指定了配置 ID 时只运行该配置，否则批量运行
//! 3. **数量截断**：limit 大于 0 时只取列表前 limit 个配置
//! 4. **串行调度**：逐个运行，每个配置恰好尝试一次，不重试
//! 5. **失败隔离**：单个配置失败只记入结果，批次继续
//! 6. **全局统计**：输出成功/失败/总数汇总

use anyhow::Result;
use tracing::{error, info};

use crate::api::{DirectoryClient, ProfileDirectory};
use crate::config::Config;
use crate::models::{BatchSummary, ProfileRecord, RunResult};
use crate::services::{ChromiumAutomation, PageInspector, ProfileAutomation};
use crate::utils::logging::{display_profiles, print_final_stats};
use crate::workflow::ProfileFlow;

/// 批量运行指纹配置
///
/// # 参数
/// - `automation`: 浏览器自动化能力
/// - `inspector`: 页面检测器
/// - `profiles`: 指纹配置列表
/// - `limit`: 运行数量上限（0 表示全部运行）
///
/// # 返回
/// 每个被选中的配置恰好对应一条结果，顺序与输入一致
pub async fn run_batch(
    automation: &dyn ProfileAutomation,
    inspector: &PageInspector,
    profiles: &[ProfileRecord],
    limit: usize,
) -> Vec<RunResult> {
    let selected = if limit > 0 && limit < profiles.len() {
        &profiles[..limit]
    } else {
        profiles
    };
    let total = selected.len();

    info!("\n⚙️ 开始运行 {} 个指纹配置...\n", total);

    let flow = ProfileFlow::new(automation, inspector);
    let mut results = Vec::with_capacity(total);

    // 严格按输入顺序逐个处理，前一个配置完整结束后才开始下一个
    for (idx, record) in selected.iter().enumerate() {
        let profile_index = idx + 1;
        log_profile_start(profile_index, total, record);

        let result = flow.run(&record.id, profile_index).await;

        if result.success {
            info!("[配置 {}] ✅ 处理完成", profile_index);
        } else {
            error!(
                "[配置 {}] ❌ 处理失败: {}",
                profile_index,
                result.error.as_deref().unwrap_or("未知错误")
            );
        }
        results.push(result);
    }

    results
}

/// 应用主结构
pub struct App {
    config: Config,
    directory: Box<dyn ProfileDirectory>,
    automation: Box<dyn ProfileAutomation>,
    inspector: PageInspector,
}

impl App {
    /// 初始化应用
    ///
    /// token 缺失或仍是占位符时直接返回错误，进程以非零状态退出
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        log_startup(&config);

        let directory = Box::new(DirectoryClient::new(&config));
        let automation = Box::new(ChromiumAutomation::new(&config));
        let inspector = PageInspector::new(&config);

        Ok(Self {
            config,
            directory,
            automation,
            inspector,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        if let Some(profile_id) = self.config.profile_id.clone() {
            return self.run_single(&profile_id).await;
        }
        self.run_all().await
    }

    /// 只运行指定的一个指纹配置
    async fn run_single(&self, profile_id: &str) -> Result<()> {
        info!("📋 使用指定的指纹配置 ID: {}", profile_id);

        let flow = ProfileFlow::new(self.automation.as_ref(), &self.inspector);
        let result = flow.run(profile_id, 1).await;

        if result.success {
            info!(
                "✅ 指纹配置运行完成，检测结果: {}",
                result.status.as_deref().unwrap_or("(无)")
            );
        } else {
            error!(
                "❌ 指纹配置运行失败: {}",
                result.error.as_deref().unwrap_or("未知错误")
            );
        }

        Ok(())
    }

    /// 获取全部指纹配置并批量运行
    async fn run_all(&self) -> Result<()> {
        info!("\n📋 正在从 API 获取指纹配置列表...");
        let profiles = self.directory.list_profiles().await?;
        info!("✅ 找到 {} 个指纹配置", profiles.len());

        display_profiles(&profiles);

        if profiles.is_empty() {
            anyhow::bail!("工作区中没有指纹配置，请先在控制台创建");
        }

        let results = run_batch(
            self.automation.as_ref(),
            &self.inspector,
            &profiles,
            self.config.profile_limit,
        )
        .await;

        let summary = BatchSummary::from_results(&results);
        print_final_stats(&summary);

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 指纹配置批量检测模式");
    info!("📊 检测目标: {}", config.target_url);
    info!("{}", "=".repeat(60));
}

fn log_profile_start(profile_index: usize, total: usize, record: &ProfileRecord) {
    info!("\n--- 配置 {}/{} ---", profile_index, total);
    info!("[配置 {}] {}", profile_index, record);
}
