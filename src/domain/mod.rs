// ==========================================
// 交付绩效看板系统 - 领域层
// ==========================================
// 职责: 交付实体与派生视图（KPI / 延迟分布）
// ==========================================

pub mod analytics;
pub mod delivery;

pub use analytics::{DelayBucket, DelayRange, DeliveryKpis};
pub use delivery::{DeliveryRecord, ImportOutcome};
