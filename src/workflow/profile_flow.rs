//! 指纹配置处理流程 - 流程层
//!
//! 定义单个指纹配置的完整生命周期：启动 → 检测 → 释放。
//! 每个配置按 等待 → 启动中 → 检测中 → 成功/失败 线性推进，
//! 任何阶段的错误都被转换成失败结果，绝不会中断批量处理

use tracing::{error, info, warn};

use crate::error::AppResult;
use crate::models::RunResult;
use crate::services::{PageInspector, ProfileAutomation};

/// 指纹配置处理流程
///
/// - 编排单个指纹配置的启动、检测、释放
/// - 不持有任何资源，只依赖业务能力
pub struct ProfileFlow<'a> {
    automation: &'a dyn ProfileAutomation,
    inspector: &'a PageInspector,
}

impl<'a> ProfileFlow<'a> {
    pub fn new(automation: &'a dyn ProfileAutomation, inspector: &'a PageInspector) -> Self {
        Self {
            automation,
            inspector,
        }
    }

    /// 运行单个指纹配置
    ///
    /// 返回的 [`RunResult`] 记录成功与否；错误信息被收进结果里，
    /// 本方法自身永远不返回错误
    pub async fn run(&self, profile_id: &str, profile_index: usize) -> RunResult {
        info!("[配置 {}] 🚀 正在启动: {}", profile_index, profile_id);

        let mut session = match self.automation.launch(profile_id).await {
            Ok(session) => session,
            Err(e) => {
                error!("[配置 {}] ❌ 启动失败: {}", profile_index, e);
                return RunResult::failure(profile_id, e.to_string());
            }
        };

        let outcome: AppResult<Option<String>> =
            self.inspector.inspect(session.as_ref()).await;

        // 无论检测结果如何，都要在结果确定前释放会话资源
        if let Err(e) = session.close().await {
            warn!("[配置 {}] ⚠️ 释放会话资源失败: {}", profile_index, e);
        }

        match outcome {
            Ok(status) => RunResult::success(profile_id, status),
            Err(e) => {
                error!("[配置 {}] ❌ 检测失败: {}", profile_index, e);
                RunResult::failure(profile_id, e.to_string())
            }
        }
    }
}
