// ==========================================
// 交付绩效看板系统 - 配置层
// ==========================================
// 职责: 导入配置（必需列、肯定词表、日期格式）
// 存储: 内置默认值，可选 JSON 文件覆写
// ==========================================

pub mod import_config;

pub use import_config::{columns, ImportConfig};
