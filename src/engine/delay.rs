// ==========================================
// 交付绩效看板系统 - 延迟分布引擎
// ==========================================
// 职责: 逐单延迟（向上取整天数，不截断）归入五个固定区间
// 输出: 固定区间顺序，空区间计数为 0
// ==========================================

use crate::domain::{DelayBucket, DelayRange, DeliveryRecord};

pub struct DelayDistributionEngine;

impl DelayDistributionEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算延迟分布直方图
    ///
    /// # 参数
    /// - records: 交付记录集（任意长度，空集合法）
    ///
    /// # 返回
    /// - Vec<DelayBucket>: 固定 5 个区间，顺序恒定；各区间计数之和等于记录总数
    pub fn compute_distribution(&self, records: &[DeliveryRecord]) -> Vec<DelayBucket> {
        let mut counts = [0i64; 5];

        for record in records {
            let range = DelayRange::classify(record.delay_days_ceil());
            counts[range.index()] += 1;
        }

        DelayRange::ALL
            .iter()
            .map(|range| DelayBucket {
                range: *range,
                label: range.label().to_string(),
                count: counts[range.index()],
            })
            .collect()
    }
}

impl Default for DelayDistributionEngine {
    fn default() -> Self {
        Self::new()
    }
}
