use serde::Serialize;

/// 单个指纹配置的运行结果
///
/// 每个被处理的指纹配置恰好产生一条记录，创建后不再修改
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// 指纹配置 ID
    pub profile_id: String,
    /// 是否运行成功
    pub success: bool,
    /// 页面检测结果（导航成功但页面上没有检测结果时为 None）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// 失败原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunResult {
    /// 创建成功结果
    pub fn success(profile_id: impl Into<String>, status: Option<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            success: true,
            status,
            error: None,
        }
    }

    /// 创建失败结果
    pub fn failure(profile_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            success: false,
            status: None,
            error: Some(error.into()),
        }
    }
}

/// 批量运行统计
///
/// 由结果序列即时计算，不单独存储
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[RunResult]) -> Self {
        let success = results.iter().filter(|r| r.success).count();
        Self {
            success,
            failed: results.len() - success,
            total: results.len(),
        }
    }
}
