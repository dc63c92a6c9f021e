//! 页面检测器 - 业务能力层
//!
//! 把会话的页面导航到检测目标并提取检测结果。目标 URL、结果选择器和
//! 等待时长都是可配置的策略，不与某个站点的页面结构绑定

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::ProfileSession;

/// 页面检测器
pub struct PageInspector {
    target_url: String,
    selector: String,
    settle_wait: Duration,
}

impl PageInspector {
    /// 按配置创建检测器
    pub fn new(config: &Config) -> Self {
        Self::with_strategy(
            &config.target_url,
            &config.status_selector,
            Duration::from_secs(config.settle_wait_secs),
        )
    }

    /// 使用自定义的检测策略（目标 URL + 选择器 + 等待时长）
    pub fn with_strategy(
        target_url: impl Into<String>,
        selector: impl Into<String>,
        settle_wait: Duration,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            selector: selector.into(),
            settle_wait,
        }
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// 导航到检测目标并读取检测结果
    ///
    /// 页面加载失败返回导航错误；页面上没有检测结果返回 `Ok(None)`
    pub async fn inspect(&self, session: &dyn ProfileSession) -> AppResult<Option<String>> {
        info!("[{}] 正在访问 {} ...", session.profile_id(), self.target_url);
        session.navigate(&self.target_url).await?;
        info!("[{}] ✅ 页面加载完成", session.profile_id());

        // 等待页面动态内容稳定后再读取结果
        if !self.settle_wait.is_zero() {
            sleep(self.settle_wait).await;
        }

        let status = session.query_text(&self.selector).await?;
        match &status {
            Some(text) => info!("[{}] ✅ 检测结果: {}", session.profile_id(), text),
            None => warn!("[{}] ⚠️ 页面上未找到检测结果", session.profile_id()),
        }

        Ok(status)
    }
}
