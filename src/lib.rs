// ==========================================
// 交付绩效看板系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine/csv
// 系统定位: 交付数据分析后端 (UI 外壳另行集成)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与派生视图
pub mod domain;

// 数据仓储层 - 会话内数据集
pub mod repository;

// 引擎层 - 聚合计算
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 导入配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DelayBucket, DelayRange, DeliveryKpis, DeliveryRecord, ImportOutcome,
};

// 引擎
pub use engine::{DelayDistributionEngine, KpiEngine};

// API
pub use api::{DashboardApi, ImportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "交付绩效看板系统";
