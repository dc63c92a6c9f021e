//! 批量运行器核心行为测试
//!
//! 用内存实现替代真实的浏览器自动化，验证调度顺序、数量截断、
//! 失败隔离和资源释放

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use profile_batch_check::error::{AppError, AppResult};
use profile_batch_check::infrastructure::ProfileSession;
use profile_batch_check::models::{BatchSummary, ProfileRecord};
use profile_batch_check::services::{PageInspector, ProfileAutomation};
use profile_batch_check::run_batch;

/// 模拟底层失败的错误源
#[derive(Debug)]
struct FakeFailure(String);

impl std::fmt::Display for FakeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FakeFailure {}

/// 每个指纹配置的预设行为
#[derive(Clone)]
enum Behavior {
    /// 启动和检测都成功，页面返回给定的检测结果
    Succeed { status: Option<String> },
    /// 浏览器进程启动即失败
    FailLaunch,
    /// 浏览器已启动但页面创建失败（启动契约要求先关闭浏览器再报错）
    FailAfterBrowserStart,
    /// 启动成功但页面导航失败
    FailNavigation,
}

struct FakeSession {
    profile_id: String,
    status: Option<String>,
    navigate_error: Option<String>,
    close_count: Arc<AtomicUsize>,
}

#[async_trait]
impl ProfileSession for FakeSession {
    fn profile_id(&self) -> &str {
        &self.profile_id
    }

    async fn navigate(&self, url: &str) -> AppResult<()> {
        match &self.navigate_error {
            Some(message) => Err(AppError::navigation_failed(
                url,
                FakeFailure(message.clone()),
            )),
            None => Ok(()),
        }
    }

    async fn query_text(&self, _selector: &str) -> AppResult<Option<String>> {
        Ok(self.status.clone())
    }

    async fn close(&mut self) -> AppResult<()> {
        self.close_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
struct FakeAutomation {
    behaviors: HashMap<String, Behavior>,
    /// 按启动顺序记录被尝试的配置 ID
    launch_attempts: Mutex<Vec<String>>,
    /// 每个成功创建的会话的关闭次数
    close_counts: Mutex<HashMap<String, Arc<AtomicUsize>>>,
    browsers_opened: AtomicUsize,
    browsers_closed: AtomicUsize,
}

impl FakeAutomation {
    fn with_behaviors(behaviors: &[(&str, Behavior)]) -> Self {
        Self {
            behaviors: behaviors
                .iter()
                .map(|(id, b)| (id.to_string(), b.clone()))
                .collect(),
            ..Self::default()
        }
    }

    fn attempts(&self) -> Vec<String> {
        self.launch_attempts.lock().unwrap().clone()
    }

    fn close_count(&self, profile_id: &str) -> usize {
        self.close_counts
            .lock()
            .unwrap()
            .get(profile_id)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }
}

#[async_trait]
impl ProfileAutomation for FakeAutomation {
    async fn launch(&self, profile_id: &str) -> AppResult<Box<dyn ProfileSession>> {
        if profile_id.trim().is_empty() {
            return Err(AppError::empty_profile_id());
        }

        self.launch_attempts
            .lock()
            .unwrap()
            .push(profile_id.to_string());

        let behavior = self
            .behaviors
            .get(profile_id)
            .cloned()
            .unwrap_or(Behavior::Succeed {
                status: Some("Your anonymity: 90%".to_string()),
            });

        let session = |status: Option<String>, navigate_error: Option<String>| {
            let close_count = Arc::new(AtomicUsize::new(0));
            self.close_counts
                .lock()
                .unwrap()
                .insert(profile_id.to_string(), close_count.clone());
            self.browsers_opened.fetch_add(1, Ordering::SeqCst);
            Box::new(FakeSession {
                profile_id: profile_id.to_string(),
                status,
                navigate_error,
                close_count,
            }) as Box<dyn ProfileSession>
        };

        match behavior {
            Behavior::Succeed { status } => Ok(session(status, None)),
            Behavior::FailNavigation => {
                Ok(session(None, Some("页面加载超时".to_string())))
            }
            Behavior::FailLaunch => Err(AppError::browser_start_failed(
                profile_id,
                FakeFailure("浏览器进程异常退出".to_string()),
            )),
            Behavior::FailAfterBrowserStart => {
                self.browsers_opened.fetch_add(1, Ordering::SeqCst);
                self.browsers_closed.fetch_add(1, Ordering::SeqCst);
                Err(AppError::page_creation_failed(
                    profile_id,
                    FakeFailure("目标页面崩溃".to_string()),
                ))
            }
        }
    }
}

fn records(ids: &[&str]) -> Vec<ProfileRecord> {
    ids.iter().map(|id| ProfileRecord::new(*id)).collect()
}

fn inspector() -> PageInspector {
    PageInspector::with_strategy("https://check.example/", ".status", Duration::ZERO)
}

#[tokio::test]
async fn results_preserve_order_and_length() {
    let automation = FakeAutomation::default();
    let profiles = records(&["a", "b", "c", "d", "e"]);

    let results = run_batch(&automation, &inspector(), &profiles, 0).await;

    assert_eq!(results.len(), 5);
    let ids: Vec<&str> = results.iter().map(|r| r.profile_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    assert!(results.iter().all(|r| r.success));
}

#[tokio::test]
async fn limit_selects_strict_prefix() {
    let automation = FakeAutomation::default();
    let profiles = records(&["a", "b", "c", "d", "e"]);

    let results = run_batch(&automation, &inspector(), &profiles, 3).await;

    assert_eq!(results.len(), 3);
    let ids: Vec<&str> = results.iter().map(|r| r.profile_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(automation.attempts(), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn limit_larger_than_input_processes_everything() {
    let automation = FakeAutomation::default();
    let profiles = records(&["a", "b"]);

    let results = run_batch(&automation, &inspector(), &profiles, 10).await;

    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn launch_failure_does_not_abort_batch() {
    let automation =
        FakeAutomation::with_behaviors(&[("b", Behavior::FailLaunch)]);
    let profiles = records(&["a", "b", "c"]);

    let results = run_batch(&automation, &inspector(), &profiles, 0).await;

    assert_eq!(results.len(), 3);
    assert!(results[0].success);
    assert!(!results[1].success);
    assert!(!results[1].error.as_deref().unwrap_or("").is_empty());
    assert!(results[2].success);
    assert_eq!(automation.attempts(), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn missing_status_indicator_still_succeeds() {
    let automation =
        FakeAutomation::with_behaviors(&[("a", Behavior::Succeed { status: None })]);
    let profiles = records(&["a"]);

    let results = run_batch(&automation, &inspector(), &profiles, 0).await;

    assert!(results[0].success);
    assert!(results[0].status.is_none());
    assert!(results[0].error.is_none());
}

#[tokio::test]
async fn navigation_failure_becomes_failed_result() {
    let automation =
        FakeAutomation::with_behaviors(&[("a", Behavior::FailNavigation)]);
    let profiles = records(&["a", "b"]);

    let results = run_batch(&automation, &inspector(), &profiles, 0).await;

    assert!(!results[0].success);
    assert!(results[0].error.as_deref().unwrap_or("").contains("页面加载超时"));
    assert!(results[1].success);
}

#[tokio::test]
async fn every_session_is_closed_exactly_once() {
    let automation =
        FakeAutomation::with_behaviors(&[("b", Behavior::FailNavigation)]);
    let profiles = records(&["a", "b", "c"]);

    run_batch(&automation, &inspector(), &profiles, 0).await;

    // 成功和检测失败的会话都必须恰好释放一次
    for id in ["a", "b", "c"] {
        assert_eq!(automation.close_count(id), 1, "会话 {} 未被正确释放", id);
    }
}

#[tokio::test]
async fn partial_launch_failure_releases_browser() {
    let automation =
        FakeAutomation::with_behaviors(&[("a", Behavior::FailAfterBrowserStart)]);
    let profiles = records(&["a"]);

    let results = run_batch(&automation, &inspector(), &profiles, 0).await;

    assert!(!results[0].success);
    assert_eq!(automation.browsers_opened.load(Ordering::SeqCst), 1);
    assert_eq!(automation.browsers_closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_profile_id_becomes_failed_result() {
    let automation = FakeAutomation::default();
    let profiles = vec![ProfileRecord::new(""), ProfileRecord::new("b")];

    let results = run_batch(&automation, &inspector(), &profiles, 0).await;

    assert_eq!(results.len(), 2);
    assert!(!results[0].success);
    assert!(results[1].success);
}

#[tokio::test]
async fn end_to_end_limit_with_mid_batch_failure() {
    // 输入 [A, B, C]，limit = 2，B 启动失败：
    // 期望结果 [A 成功, B 失败]，C 因截断从未被尝试
    let automation =
        FakeAutomation::with_behaviors(&[("B", Behavior::FailLaunch)]);
    let profiles = records(&["A", "B", "C"]);

    let results = run_batch(&automation, &inspector(), &profiles, 2).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].profile_id, "A");
    assert!(results[0].success);
    assert_eq!(results[1].profile_id, "B");
    assert!(!results[1].success);
    assert!(!results[1].error.as_deref().unwrap_or("").is_empty());
    assert_eq!(automation.attempts(), vec!["A", "B"]);

    let summary = BatchSummary::from_results(&results);
    assert_eq!(summary.success, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total, 2);
}
