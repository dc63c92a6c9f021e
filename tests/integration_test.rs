//! 真实环境集成测试
//!
//! 需要配置 GL_API_TOKEN（以及可选的 GL_PROFILE_ID）并安装 Chromium

use std::sync::Once;

use profile_batch_check::api::{DirectoryClient, ProfileDirectory};
use profile_batch_check::services::{ChromiumAutomation, PageInspector, ProfileAutomation};
use profile_batch_check::utils::logging;
use profile_batch_check::Config;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(logging::init);
}

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_list_profiles() {
    init_logging();

    let config = Config::from_env();
    config.validate().expect("GL_API_TOKEN 未配置");

    let client = DirectoryClient::new(&config);
    let profiles = client
        .list_profiles()
        .await
        .expect("获取指纹配置列表失败");

    println!("找到 {} 个指纹配置", profiles.len());
    for profile in profiles.iter().take(10) {
        println!("  {}", profile);
    }
}

#[tokio::test]
#[ignore]
async fn test_run_single_profile() {
    init_logging();

    let config = Config::from_env();
    config.validate().expect("GL_API_TOKEN 未配置");

    let profile_id = config
        .profile_id
        .clone()
        .expect("请通过 GL_PROFILE_ID 指定要运行的指纹配置");

    let automation = ChromiumAutomation::new(&config);
    let inspector = PageInspector::new(&config);

    let mut session = automation
        .launch(&profile_id)
        .await
        .expect("启动指纹配置失败");

    let status = inspector
        .inspect(session.as_ref())
        .await
        .expect("页面检测失败");

    session.close().await.expect("关闭会话失败");

    println!("检测结果: {:?}", status);
}
