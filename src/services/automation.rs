//! 浏览器自动化能力 - 业务能力层
//!
//! 把"启动一个指纹配置"抽象成接口，编排层可以用内存实现替代真实浏览器进行测试

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::browser::launch_profile_browser;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{ChromiumSession, ProfileSession};

/// 浏览器自动化能力
#[async_trait]
pub trait ProfileAutomation: Send + Sync {
    /// 启动指纹配置对应的浏览器，返回持有唯一页面的会话
    ///
    /// 前置条件：`profile_id` 非空，否则返回 [`AppError::InvalidArgument`]
    async fn launch(&self, profile_id: &str) -> AppResult<Box<dyn ProfileSession>>;
}

/// 基于 chromiumoxide 的真实自动化实现
pub struct ChromiumAutomation {
    config: Config,
}

impl ChromiumAutomation {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl ProfileAutomation for ChromiumAutomation {
    async fn launch(&self, profile_id: &str) -> AppResult<Box<dyn ProfileSession>> {
        if profile_id.trim().is_empty() {
            return Err(AppError::empty_profile_id());
        }

        let (mut browser, handler_task) =
            launch_profile_browser(&self.config, profile_id).await?;

        // 为会话创建唯一页面；失败时必须先关闭已启动的浏览器再返回错误，
        // 不允许留下半开的会话
        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                if let Err(close_err) = browser.close().await {
                    warn!("[{}] 关闭浏览器时出错: {}", profile_id, close_err);
                }
                handler_task.abort();
                return Err(AppError::page_creation_failed(profile_id, e));
            }
        };
        info!("✅ 新页面创建成功");

        // 关闭浏览器自动打开的多余页面，保证每个会话只有一个活动页面
        match browser.pages().await {
            Ok(pages) => {
                for stray in pages {
                    if stray.target_id() != page.target_id() {
                        debug!("[{}] 关闭多余页面", profile_id);
                        let _ = stray.close().await;
                    }
                }
            }
            Err(e) => {
                debug!("[{}] 获取页面列表失败: {}", profile_id, e);
            }
        }

        Ok(Box::new(ChromiumSession::new(
            profile_id,
            browser,
            page,
            handler_task,
            Duration::from_secs(self.config.navigation_timeout_secs),
        )))
    }
}
