//! # Profile Batch Check
//!
//! 一个用于批量运行和检测远端指纹浏览器配置的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Browser + Page），只暴露能力
//! - `ChromiumSession` - 唯一的浏览器/页面 owner，提供导航、查询、关闭能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个指纹配置
//! - `ChromiumAutomation` - 启动指纹配置浏览器的能力
//! - `PageInspector` - 页面检测能力（目标 URL + 选择器 + 等待策略）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个指纹配置"的完整处理流程
//! - `ProfileFlow` - 流程编排（启动 → 检测 → 释放），失败转结果
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 批量运行器，串行调度和全局统计
//!
//! 另有 `api/` 封装配置管理服务的 REST 接口（列表、快速创建）。
//!
//! ## 模块结构

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use api::{DirectoryClient, ProfileDirectory};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{ChromiumSession, ProfileSession};
pub use models::{BatchSummary, ProfileRecord, RunResult};
pub use orchestrator::{run_batch, App};
pub use services::{ChromiumAutomation, PageInspector, ProfileAutomation};
pub use workflow::ProfileFlow;
