//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_runner` - 批量运行器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 从配置目录获取指纹配置列表
//! - 严格串行地逐个运行指纹配置
//! - 单个配置的失败不会中断整个批次
//! - 输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (处理 Vec<ProfileRecord>)
//!     ↓
//! workflow::ProfileFlow (处理单个指纹配置)
//!     ↓
//! services (能力层：automation / inspector)
//!     ↓
//! infrastructure (基础设施：ChromiumSession)
//! ```
//!
//! ## 设计原则
//!
//! 1. **串行处理**：一个配置的启动、检测、释放全部完成后才开始下一个
//! 2. **结果有序**：结果顺序与（截断后的）输入顺序一致
//! 3. **失败隔离**：单项失败转换成失败结果，绝不向上传播
//! 4. **向下依赖**：编排层 → workflow → services → infrastructure

pub mod batch_runner;

pub use batch_runner::{run_batch, App};
