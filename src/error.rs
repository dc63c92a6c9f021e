use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 配置错误
    Config(ConfigError),
    /// 配置目录（工作区列表）错误
    Directory(DirectoryError),
    /// 无效参数（空的指纹配置 ID）
    InvalidArgument {
        message: String,
    },
    /// 浏览器启动错误
    Launch(LaunchError),
    /// 页面导航错误
    Navigation(NavigationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Directory(e) => write!(f, "目录错误: {}", e),
            AppError::InvalidArgument { message } => write!(f, "参数错误: {}", message),
            AppError::Launch(e) => write!(f, "启动错误: {}", e),
            AppError::Navigation(e) => write!(f, "导航错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Directory(e) => Some(e),
            AppError::InvalidArgument { .. } => None,
            AppError::Launch(e) => Some(e),
            AppError::Navigation(e) => Some(e),
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量不存在
    EnvVarNotFound {
        var_name: String,
    },
    /// 环境变量仍是占位符值
    PlaceholderValue {
        var_name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarNotFound { var_name } => {
                write!(f, "环境变量 {} 未设置", var_name)
            }
            ConfigError::PlaceholderValue { var_name } => {
                write!(f, "环境变量 {} 仍是占位符值，请填写真实值", var_name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// 配置目录错误
#[derive(Debug)]
pub enum DirectoryError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回非成功状态码
    BadStatus {
        endpoint: String,
        status: u16,
    },
    /// 响应格式不符合预期
    MalformedResponse {
        endpoint: String,
        message: String,
    },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            DirectoryError::BadStatus { endpoint, status } => {
                write!(f, "API返回错误状态码 ({}): {}", endpoint, status)
            }
            DirectoryError::MalformedResponse { endpoint, message } => {
                write!(f, "API响应格式错误 ({}): {}", endpoint, message)
            }
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::RequestFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 浏览器启动错误
#[derive(Debug)]
pub enum LaunchError {
    /// 浏览器配置构建失败
    ConfigurationFailed {
        profile_id: String,
        message: String,
    },
    /// 浏览器进程启动失败
    BrowserStartFailed {
        profile_id: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建页面失败
    PageCreationFailed {
        profile_id: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::ConfigurationFailed {
                profile_id,
                message,
            } => {
                write!(f, "浏览器配置构建失败 (指纹配置: {}): {}", profile_id, message)
            }
            LaunchError::BrowserStartFailed { profile_id, source } => {
                write!(f, "浏览器启动失败 (指纹配置: {}): {}", profile_id, source)
            }
            LaunchError::PageCreationFailed { profile_id, source } => {
                write!(f, "创建页面失败 (指纹配置: {}): {}", profile_id, source)
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::BrowserStartFailed { source, .. }
            | LaunchError::PageCreationFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            LaunchError::ConfigurationFailed { .. } => None,
        }
    }
}

/// 页面导航错误
#[derive(Debug)]
pub enum NavigationError {
    /// 页面加载失败
    LoadFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面加载超时
    Timeout {
        url: String,
        timeout_secs: u64,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::LoadFailed { url, source } => {
                write!(f, "导航到 {} 失败: {}", url, source)
            }
            NavigationError::Timeout { url, timeout_secs } => {
                write!(f, "导航到 {} 超时 ({}秒)", url, timeout_secs)
            }
        }
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigationError::LoadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            NavigationError::Timeout { .. } => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        AppError::Directory(err)
    }
}

impl From<LaunchError> for AppError {
    fn from(err: LaunchError) -> Self {
        AppError::Launch(err)
    }
}

impl From<NavigationError> for AppError {
    fn from(err: NavigationError) -> Self {
        AppError::Navigation(err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建空指纹配置 ID 错误
    pub fn empty_profile_id() -> Self {
        AppError::InvalidArgument {
            message: "指纹配置 ID 不能为空".to_string(),
        }
    }

    /// 创建目录请求失败错误
    pub fn directory_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Directory(DirectoryError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建浏览器启动失败错误
    pub fn browser_start_failed(
        profile_id: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Launch(LaunchError::BrowserStartFailed {
            profile_id: profile_id.into(),
            source: Box::new(source),
        })
    }

    /// 创建页面创建失败错误
    pub fn page_creation_failed(
        profile_id: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Launch(LaunchError::PageCreationFailed {
            profile_id: profile_id.into(),
            source: Box::new(source),
        })
    }

    /// 创建页面加载失败错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Navigation(NavigationError::LoadFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
