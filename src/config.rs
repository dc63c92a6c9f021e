use crate::error::{AppResult, ConfigError};

/// 占位符 token，说明用户还没有填写真实的 API token
const TOKEN_PLACEHOLDER: &str = "your_dev_token_here";

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 配置管理服务 API 地址
    pub api_base_url: String,
    /// 配置管理服务 API token
    pub api_token: String,
    /// 指定运行的指纹配置 ID（为空时批量运行）
    pub profile_id: Option<String>,
    /// 检测目标 URL
    pub target_url: String,
    /// 检测结果选择器
    pub status_selector: String,
    /// 批量运行的指纹配置数量上限（0 表示全部）
    pub profile_limit: usize,
    /// 页面加载后的固定等待时间（秒）
    pub settle_wait_secs: u64,
    /// 页面导航超时时间（秒）
    pub navigation_timeout_secs: u64,
    /// 是否以无头模式启动浏览器
    pub headless: bool,
    /// 浏览器可执行文件路径（为空时自动探测）
    pub chrome_path: Option<String>,
    /// 指纹配置用户数据目录
    pub profiles_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.gologin.com".to_string(),
            api_token: String::new(),
            profile_id: None,
            target_url: "https://whoer.net/".to_string(),
            status_selector: ".trustworthy:not(.hide)".to_string(),
            profile_limit: 1,
            settle_wait_secs: 10,
            navigation_timeout_secs: 60,
            headless: true,
            chrome_path: None,
            profiles_dir: ".profiles".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("GL_API_BASE_URL").unwrap_or(default.api_base_url),
            api_token: std::env::var("GL_API_TOKEN").unwrap_or(default.api_token),
            profile_id: std::env::var("GL_PROFILE_ID").ok().filter(|v| !v.is_empty()),
            target_url: std::env::var("TARGET_URL").unwrap_or(default.target_url),
            status_selector: std::env::var("STATUS_SELECTOR").unwrap_or(default.status_selector),
            profile_limit: std::env::var("PROFILE_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.profile_limit),
            settle_wait_secs: std::env::var("SETTLE_WAIT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.settle_wait_secs),
            navigation_timeout_secs: std::env::var("NAVIGATION_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.navigation_timeout_secs),
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            chrome_path: std::env::var("CHROME_PATH").ok().filter(|v| !v.is_empty()),
            profiles_dir: std::env::var("PROFILES_DIR").unwrap_or(default.profiles_dir),
        }
    }

    /// 校验启动必需的配置项
    ///
    /// token 缺失或仍是占位符值时返回 [`ConfigError`]，程序应当立即退出
    pub fn validate(&self) -> AppResult<()> {
        if self.api_token.is_empty() {
            return Err(ConfigError::EnvVarNotFound {
                var_name: "GL_API_TOKEN".to_string(),
            }
            .into());
        }
        if self.api_token == TOKEN_PLACEHOLDER {
            return Err(ConfigError::PlaceholderValue {
                var_name: "GL_API_TOKEN".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
