use serde::{Deserialize, Serialize};

/// 工作区中的一条指纹配置记录
///
/// 从目录列表响应解析得到，只读，运行结束后即丢弃
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// 指纹配置 ID（部分接口以 profileId 字段返回）
    #[serde(default, alias = "profileId")]
    pub id: String,
    /// 指纹配置名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProfileRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// 用于显示的名称，未命名时使用固定占位名
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}

impl std::fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.id, self.display_name())
    }
}
