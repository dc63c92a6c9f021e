//! 配置目录客户端
//!
//! 封装配置管理服务的 REST 接口：列出工作区指纹配置、快速创建随机指纹配置

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult, DirectoryError};
use crate::models::ProfileRecord;

/// 指纹配置目录能力
///
/// 把远端服务抽象成接口，编排层可以用内存实现替代真实服务进行测试
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// 列出工作区中的全部指纹配置
    ///
    /// 返回顺序与远端服务一致，不做本地排序
    async fn list_profiles(&self) -> AppResult<Vec<ProfileRecord>>;

    /// 创建一个随机指纹的新配置，返回其 ID
    async fn create_profile_random_fingerprint(&self) -> AppResult<String>;
}

/// 配置目录 REST 客户端
pub struct DirectoryClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl DirectoryClient {
    /// 创建新的目录客户端
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// 从列表响应中提取指纹配置集合
    ///
    /// 不同版本的接口把集合放在 `profiles` 或 `data` 字段下，两者都接受；
    /// 集合不是数组时返回 [`DirectoryError::MalformedResponse`]
    fn normalize_profile_collection(endpoint: &str, body: &Value) -> AppResult<Vec<ProfileRecord>> {
        let collection = body
            .get("profiles")
            .filter(|v| !v.is_null())
            .or_else(|| body.get("data").filter(|v| !v.is_null()));

        let Some(value) = collection else {
            return Ok(Vec::new());
        };

        let Some(items) = value.as_array() else {
            return Err(DirectoryError::MalformedResponse {
                endpoint: endpoint.to_string(),
                message: "指纹配置集合不是数组".to_string(),
            }
            .into());
        };

        items
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone()).map_err(|e| {
                    AppError::Directory(DirectoryError::MalformedResponse {
                        endpoint: endpoint.to_string(),
                        message: format!("无法解析指纹配置记录: {}", e),
                    })
                })
            })
            .collect()
    }
}

#[async_trait]
impl ProfileDirectory for DirectoryClient {
    async fn list_profiles(&self) -> AppResult<Vec<ProfileRecord>> {
        let endpoint = format!("{}/browser/v2", self.base_url);
        debug!("请求指纹配置列表: {}", endpoint);

        let response = self
            .http
            .get(&endpoint)
            .query(&[
                ("page", "1"),
                ("sorterField", "createdAt"),
                ("sorterOrder", "descend"),
            ])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| AppError::directory_request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::BadStatus {
                endpoint,
                status: status.as_u16(),
            }
            .into());
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::directory_request_failed(&endpoint, e))?;

        Self::normalize_profile_collection(&endpoint, &body)
    }

    async fn create_profile_random_fingerprint(&self) -> AppResult<String> {
        let endpoint = format!("{}/browser/quick", self.base_url);
        debug!("请求创建随机指纹配置: {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| AppError::directory_request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::BadStatus {
                endpoint,
                status: status.as_u16(),
            }
            .into());
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::directory_request_failed(&endpoint, e))?;

        body.get("id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                DirectoryError::MalformedResponse {
                    endpoint,
                    message: "响应中缺少 id 字段".to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ENDPOINT: &str = "https://api.example.com/browser/v2";

    #[test]
    fn accepts_profiles_key() {
        let body = json!({"profiles": [{"id": "a", "name": "第一个"}, {"id": "b"}]});
        let records = DirectoryClient::normalize_profile_collection(ENDPOINT, &body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[0].display_name(), "第一个");
        assert_eq!(records[1].display_name(), "Unnamed");
    }

    #[test]
    fn accepts_data_key() {
        let body = json!({"data": [{"id": "a"}, {"id": "b"}]});
        let records = DirectoryClient::normalize_profile_collection(ENDPOINT, &body).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn both_keys_yield_equivalent_records() {
        let items = json!([{"id": "a", "name": "n1"}, {"profileId": "b"}]);
        let from_profiles = DirectoryClient::normalize_profile_collection(
            ENDPOINT,
            &json!({ "profiles": items.clone() }),
        )
        .unwrap();
        let from_data =
            DirectoryClient::normalize_profile_collection(ENDPOINT, &json!({ "data": items }))
                .unwrap();
        let ids = |records: &[ProfileRecord]| {
            records.iter().map(|r| r.id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&from_profiles), ids(&from_data));
        assert_eq!(ids(&from_profiles), vec!["a", "b"]);
    }

    #[test]
    fn rejects_non_array_collection() {
        let body = json!({"profiles": "not-a-list"});
        let err = DirectoryClient::normalize_profile_collection(ENDPOINT, &body).unwrap_err();
        assert!(matches!(err, AppError::Directory(_)));
    }

    #[test]
    fn missing_collection_yields_empty_list() {
        let body = json!({"total": 0});
        let records = DirectoryClient::normalize_profile_collection(ENDPOINT, &body).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn null_profiles_falls_back_to_data() {
        let body = json!({"profiles": null, "data": [{"id": "a"}]});
        let records = DirectoryClient::normalize_profile_collection(ENDPOINT, &body).unwrap();
        assert_eq!(records.len(), 1);
    }
}
