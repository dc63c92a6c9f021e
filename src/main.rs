use anyhow::Result;
use profile_batch_check::orchestrator::App;
use profile_batch_check::utils::logging;
use profile_batch_check::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（不存在时忽略）
    dotenv::dotenv().ok();

    // 初始化日志
    logging::init();

    // 加载配置；命令行第一个参数可以指定单独运行的指纹配置 ID
    let mut config = Config::from_env();
    if let Some(profile_id) = std::env::args().nth(1) {
        config.profile_id = Some(profile_id);
    }

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
