use std::path::Path;

use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult, LaunchError};

/// 启动一个指纹配置对应的浏览器实例
///
/// 每个指纹配置使用独立的用户数据目录，互不干扰
pub async fn launch_profile_browser(
    config: &Config,
    profile_id: &str,
) -> AppResult<(Browser, JoinHandle<()>)> {
    info!("🚀 启动指纹配置浏览器: {}", profile_id);

    let user_data_dir = Path::new(&config.profiles_dir).join(profile_id);
    debug!("用户数据目录: {}", user_data_dir.display());

    let mut builder = BrowserConfig::builder()
        .user_data_dir(&user_data_dir)
        .args(vec![
            "--disable-gpu",             // 无头模式下禁用 GPU
            "--no-sandbox",              // 禁用沙盒，防止权限问题导致的崩溃
            "--disable-dev-shm-usage",   // 防止共享内存不足
            "--remote-debugging-port=0", // 让浏览器自动选择调试端口
        ]);

    if config.headless {
        builder = builder.new_headless_mode();
    } else {
        builder = builder.with_head();
    }

    if let Some(chrome_path) = &config.chrome_path {
        debug!("使用指定的浏览器可执行文件: {}", chrome_path);
        builder = builder.chrome_executable(Path::new(chrome_path));
    }

    let browser_config = builder.build().map_err(|message| {
        error!("构建浏览器配置失败: {}", message);
        LaunchError::ConfigurationFailed {
            profile_id: profile_id.to_string(),
            message,
        }
    })?;

    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("启动浏览器失败: {}", e);
        AppError::browser_start_failed(profile_id, e)
    })?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    Ok((browser, handler_task))
}
