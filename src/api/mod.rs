//! API 模块
//!
//! 负责与配置管理服务 REST API 的交互

pub mod directory;

pub use directory::{DirectoryClient, ProfileDirectory};
