// ==========================================
// 交付绩效看板系统 - 引擎层
// ==========================================
// 职责: 交付记录集上的纯聚合计算
// 约束: 无状态、无副作用，每次数据变更后从零重算
// ==========================================

pub mod delay;
pub mod kpi;

pub use delay::DelayDistributionEngine;
pub use kpi::KpiEngine;
