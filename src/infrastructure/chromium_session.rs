//! 指纹配置会话 - 基础设施层
//!
//! 持有一个指纹配置的浏览器和唯一的页面资源，只暴露导航、查询、关闭能力

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, Page};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, NavigationError};

/// 指纹配置会话能力
///
/// 一次运行期间独占浏览器和页面句柄；无论成功失败都必须在结果
/// 确定前调用 [`close`](ProfileSession::close) 释放资源
#[async_trait]
pub trait ProfileSession: Send + Sync {
    /// 会话对应的指纹配置 ID
    fn profile_id(&self) -> &str;

    /// 把会话的页面导航到指定 URL，等待页面加载完成
    async fn navigate(&self, url: &str) -> AppResult<()>;

    /// 查询页面上选择器对应元素的文本
    ///
    /// 元素不存在或没有文本时返回 `None`，不视为错误
    async fn query_text(&self, selector: &str) -> AppResult<Option<String>>;

    /// 关闭浏览器并释放会话资源
    async fn close(&mut self) -> AppResult<()>;
}

/// 基于 chromiumoxide 的真实会话
pub struct ChromiumSession {
    profile_id: String,
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    nav_timeout: Duration,
    closed: bool,
}

impl ChromiumSession {
    pub fn new(
        profile_id: impl Into<String>,
        browser: Browser,
        page: Page,
        handler_task: JoinHandle<()>,
        nav_timeout: Duration,
    ) -> Self {
        Self {
            profile_id: profile_id.into(),
            browser,
            page,
            handler_task,
            nav_timeout,
            closed: false,
        }
    }
}

#[async_trait]
impl ProfileSession for ChromiumSession {
    fn profile_id(&self) -> &str {
        &self.profile_id
    }

    async fn navigate(&self, url: &str) -> AppResult<()> {
        debug!("[{}] 导航到: {}", self.profile_id, url);

        let navigation = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            Ok::<_, chromiumoxide::error::CdpError>(())
        };

        match timeout(self.nav_timeout, navigation).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(AppError::navigation_failed(url, e)),
            Err(_) => Err(NavigationError::Timeout {
                url: url.to_string(),
                timeout_secs: self.nav_timeout.as_secs(),
            }
            .into()),
        }
    }

    async fn query_text(&self, selector: &str) -> AppResult<Option<String>> {
        let element = match self.page.find_element(selector).await {
            Ok(element) => element,
            // 页面上没有该元素，返回空结果
            Err(_) => return Ok(None),
        };

        match element.inner_text().await {
            Ok(text) => Ok(text
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())),
            Err(_) => Ok(None),
        }
    }

    async fn close(&mut self) -> AppResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        if let Err(e) = self.browser.close().await {
            warn!("[{}] 关闭浏览器时出错: {}", self.profile_id, e);
        }
        self.handler_task.abort();

        debug!("[{}] 会话已关闭", self.profile_id);
        Ok(())
    }
}
